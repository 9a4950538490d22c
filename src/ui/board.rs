use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};

use crate::forms::{FormKind, MessagePresenter, Severity};

/// How long a message stays up before it is dismissed
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// A message currently shown on one of the forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedMessage {
    pub id: u64,
    pub form: FormKind,
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug)]
struct BoardInner {
    current: Mutex<Option<PlacedMessage>>,
    next_id: AtomicU64,
    dialog_open: Arc<AtomicBool>,
    dismiss_after: Duration,
}

impl BoardInner {
    fn current(&self) -> MutexGuard<'_, Option<PlacedMessage>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove_if(&self, keep: impl FnOnce(&PlacedMessage) -> bool) {
        let mut current = self.current();
        if current.as_ref().is_some_and(|message| !keep(message)) {
            *current = None;
        }
    }
}

/// In-memory message presenter.
///
/// At most one message is visible at a time. It lands on the appointment
/// form while the appointment dialog is open, otherwise on the contact form,
/// and is dismissed after a fixed delay. Outside a tokio runtime the message
/// is still shown but stays until replaced or cleared.
#[derive(Debug, Clone)]
pub struct MessageBoard {
    inner: Arc<BoardInner>,
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl MessageBoard {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            inner: Arc::new(BoardInner {
                current: Mutex::new(None),
                next_id: AtomicU64::new(1),
                dialog_open: Arc::new(AtomicBool::new(false)),
                dismiss_after,
            }),
        }
    }

    /// Flag shared with the appointment dialog to decide placement
    pub(crate) fn dialog_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.inner.dialog_open)
    }

    pub fn current(&self) -> Option<PlacedMessage> {
        self.inner.current().clone()
    }

    /// Remove the message if it sits on `form`
    pub fn clear_form(&self, form: FormKind) {
        self.inner.remove_if(|message| message.form != form);
    }

    pub fn clear(&self) {
        *self.inner.current() = None;
    }

    fn active_form(&self) -> FormKind {
        if self.inner.dialog_open.load(Ordering::SeqCst) {
            FormKind::Appointment
        } else {
            FormKind::Contact
        }
    }
}

impl MessagePresenter for MessageBoard {
    fn display(&self, message: &str, severity: Severity) {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let form = self.active_form();
        *self.inner.current() = Some(PlacedMessage {
            id,
            form,
            text: message.to_string(),
            severity,
        });
        tracing::debug!(message.id = id, form = %form, severity = ?severity, "Message displayed");

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(message.id = id, "No tokio runtime, message will not auto-dismiss");
            return;
        };

        let deadline = Instant::now() + self.inner.dismiss_after;
        let inner = Arc::downgrade(&self.inner);
        runtime.spawn(async move {
            sleep_until(deadline).await;
            if let Some(inner) = inner.upgrade() {
                // A newer message replaced this one; leave it alone
                inner.remove_if(|current| current.id != id);
            }
        });
    }
}
