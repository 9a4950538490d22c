// Boundary traits for the collaborators a workflow drives.
// Real surfaces (DOM, terminal, in-memory) implement these; tests mock them.

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use crate::forms::types::Severity;

/// A rendered form: its submit affordance and its fields
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait EntryPoint: Send + Sync {
    /// Current label of the submit affordance
    fn submit_label(&self) -> String;

    fn set_submit_label(&self, label: &str);

    fn set_submit_enabled(&self, enabled: bool);

    /// Reset every field to empty
    fn clear_fields(&self);
}

/// Renders success and error text to the visitor.
///
/// Implementations own placement, replacing any earlier message, and
/// dismissing the message after a while.
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait MessagePresenter: Send + Sync {
    fn display(&self, message: &str, severity: Severity);
}

/// The dialog hosting the appointment form
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait ModalController: Send + Sync {
    fn close(&self);
}
