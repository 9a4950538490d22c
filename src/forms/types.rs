// Core types for the form submission workflow

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fields that every entry point must fill in, checked in this order.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "phone", "email"];

/// Human-readable label for a form field.
///
/// Unknown fields fall back to the raw field name.
pub fn field_label(field: &str) -> &str {
    match field {
        "name" => "Nome",
        "phone" => "Telefone",
        "email" => "E-mail",
        "service" => "Serviço",
        "date" => "Data",
        "time" => "Horário",
        other => other,
    }
}

/// Which form surface produced a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Appointment,
}

impl FormKind {
    /// Submit button label while the simulated submission is in flight
    pub fn progress_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Enviando...",
            FormKind::Appointment => "Agendando...",
        }
    }

    /// Message presented once the simulated submission completes
    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => {
                "Solicitação enviada com sucesso! Entraremos em contato em breve."
            }
            FormKind::Appointment => {
                "Agendamento realizado com sucesso! Você receberá uma confirmação em breve."
            }
        }
    }

    /// Submit button label when the form is first rendered
    pub fn default_submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Enviar Solicitação",
            FormKind::Appointment => "Confirmar Agendamento",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Contact => write!(f, "contact"),
            FormKind::Appointment => write!(f, "appointment"),
        }
    }
}

/// How a presented message should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Lifecycle of one entry point's submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowState {
    /// Form rendered or cleared, nothing in flight
    Idle,
    /// Simulated submission armed, waiting for the delay to elapse
    Submitting,
    /// Last submission completed
    Succeeded,
    /// Last submit attempt was rejected by validation; accepts a retry
    Failed,
}

impl WorkflowState {
    /// Whether a new submission may start from this state
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, WorkflowState::Submitting)
    }
}

/// Field values collected from an entry point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    fields: BTreeMap<String, String>,
}

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of `field` if present and non-blank after trimming
    pub fn filled(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|value| !value.trim().is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SubmissionRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = SubmissionRecord::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

/// A record that passed validation.
///
/// Only [`crate::forms::validate`] constructs one, so holding a
/// `ValidatedRecord` proves the required fields and formats were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord(SubmissionRecord);

impl ValidatedRecord {
    pub(crate) fn new(record: SubmissionRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &SubmissionRecord {
        &self.0
    }

    pub fn into_inner(self) -> SubmissionRecord {
        self.0
    }
}

/// Result of a completed simulated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub kind: FormKind,
    pub correlation_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label("name"), "Nome");
        assert_eq!(field_label("phone"), "Telefone");
        assert_eq!(field_label("email"), "E-mail");
        assert_eq!(field_label("service"), "Serviço");
        assert_eq!(field_label("date"), "Data");
        assert_eq!(field_label("time"), "Horário");
        assert_eq!(field_label("notes"), "notes");
    }

    #[test]
    fn test_filled_ignores_whitespace_only_values() {
        let record = SubmissionRecord::new()
            .with("name", "   ")
            .with("email", " ana@example.com ");

        assert_eq!(record.filled("name"), None);
        assert_eq!(record.filled("phone"), None);
        assert_eq!(record.filled("email"), Some(" ana@example.com "));
    }

    #[test]
    fn test_record_from_pairs() {
        let record: SubmissionRecord = [("name", "Ana"), ("service", "corte")].into_iter().collect();
        assert_eq!(record.get("name"), Some("Ana"));
        assert_eq!(record.get("service"), Some("corte"));
        assert_eq!(record.fields().count(), 2);
    }

    #[test]
    fn test_only_submitting_blocks_new_submission() {
        assert!(WorkflowState::Idle.accepts_submission());
        assert!(WorkflowState::Failed.accepts_submission());
        assert!(WorkflowState::Succeeded.accepts_submission());
        assert!(!WorkflowState::Submitting.accepts_submission());
    }

    #[test]
    fn test_record_serializes_as_flat_map() {
        let record = SubmissionRecord::new().with("name", "Ana");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ana"}"#);
    }
}
