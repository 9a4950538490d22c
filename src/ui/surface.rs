use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::fields::format_phone_number;
use crate::forms::{EntryPoint, FormKind, SubmissionRecord};

#[derive(Debug)]
struct SurfaceState {
    fields: BTreeMap<String, String>,
    submit_label: String,
    submit_enabled: bool,
}

/// In-memory form surface: field values plus the submit button
#[derive(Debug)]
pub struct FormSurface {
    kind: FormKind,
    state: Mutex<SurfaceState>,
}

impl FormSurface {
    pub fn new(kind: FormKind) -> Self {
        Self::with_submit_label(kind, kind.default_submit_label())
    }

    pub fn with_submit_label(kind: FormKind, label: &str) -> Self {
        Self {
            kind,
            state: Mutex::new(SurfaceState {
                fields: BTreeMap::new(),
                submit_label: label.to_string(),
                submit_enabled: true,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Type into a field. Phone input is masked as it is typed.
    pub fn input(&self, field: &str, value: &str) {
        let value = if field == "phone" {
            format_phone_number(value)
        } else {
            value.to_string()
        };
        self.state().fields.insert(field.to_string(), value);
    }

    pub fn value(&self, field: &str) -> Option<String> {
        self.state().fields.get(field).cloned()
    }

    /// Snapshot of the fields as a submission record
    pub fn record(&self) -> SubmissionRecord {
        self.state()
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state().submit_enabled
    }
}

impl EntryPoint for FormSurface {
    fn submit_label(&self) -> String {
        self.state().submit_label.clone()
    }

    fn set_submit_label(&self, label: &str) {
        self.state().submit_label = label.to_string();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.state().submit_enabled = enabled;
    }

    fn clear_fields(&self) {
        self.state().fields.clear();
    }
}
