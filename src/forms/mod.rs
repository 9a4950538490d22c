// Form workflow module
//
// Validation and simulated submission for the contact and appointment forms,
// with the collaborators it drives kept behind traits.

pub mod state_machine;
pub mod traits;
pub mod types;
pub mod validation;
pub mod workflow;

pub use state_machine::{SubmissionLifecycle, WorkflowEvent};
pub use traits::{EntryPoint, MessagePresenter, ModalController};
pub use types::{
    field_label, FormKind, Severity, SubmissionOutcome, SubmissionRecord, ValidatedRecord,
    WorkflowState, REQUIRED_FIELDS,
};
pub use validation::{is_valid_email, is_valid_phone, validate, ValidationError};
pub use workflow::{FormWorkflow, SubmissionHandle, WorkflowError, DEFAULT_SUBMIT_DELAY};
