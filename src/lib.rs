// Belleza Forms Library - contact and appointment form workflow
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod fields;
pub mod forms;
pub mod telemetry;
pub mod ui;

// Re-export key types for easy access
pub use crate::config::{config, BellezaConfig};
pub use fields::{format_phone_number, min_appointment_date, whatsapp_link};
pub use forms::{
    validate, FormKind, FormWorkflow, Severity, SubmissionHandle, SubmissionOutcome,
    SubmissionRecord, ValidatedRecord, ValidationError, WorkflowError, WorkflowState,
};
pub use telemetry::{create_submission_span, generate_correlation_id, init_telemetry};
pub use ui::{AppointmentModal, FormSurface, MessageBoard};
