// Form submission workflow
//
// One FormWorkflow per entry point. Validation happens before anything is
// touched; a validated record disables the submit affordance, arms a one-shot
// timer standing in for the network round trip, and the completion task
// reports the outcome and restores the form.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use statig::prelude::*;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{info, warn, Instrument};

use crate::forms::state_machine::{SubmissionLifecycle, WorkflowEvent};
use crate::forms::traits::{EntryPoint, MessagePresenter, ModalController};
use crate::forms::types::{
    FormKind, Severity, SubmissionOutcome, SubmissionRecord, ValidatedRecord, WorkflowState,
};
use crate::forms::validation::{validate, ValidationError};
use crate::telemetry::{create_submission_span, generate_correlation_id};

/// Simulated network latency for a submission
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("A {kind} submission is already in flight")]
    SubmissionInFlight { kind: FormKind },
    #[error("Submission {correlation_id} was interrupted before completing")]
    Interrupted { correlation_id: String },
    #[error("A {kind} submission needs a running tokio runtime to arm its timer")]
    NoRuntime { kind: FormKind },
}

struct Shared {
    kind: FormKind,
    machine: Mutex<StateMachine<SubmissionLifecycle>>,
    entry: Arc<dyn EntryPoint>,
    presenter: Arc<dyn MessagePresenter>,
    modal: Option<Arc<dyn ModalController>>,
}

impl Shared {
    fn machine(&self) -> MutexGuard<'_, StateMachine<SubmissionLifecycle>> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn complete(&self, correlation_id: String, original_label: String) -> SubmissionOutcome {
        self.machine().handle(&WorkflowEvent::Complete);

        // The dialog clears its own messages when it closes, so close it
        // before presenting the confirmation.
        if self.kind == FormKind::Appointment {
            if let Some(modal) = &self.modal {
                modal.close();
            }
        }

        let message = self.kind.success_message();
        self.presenter.display(message, Severity::Success);
        self.entry.clear_fields();
        self.entry.set_submit_label(&original_label);
        self.entry.set_submit_enabled(true);

        SubmissionOutcome {
            kind: self.kind,
            correlation_id,
            message: message.to_string(),
        }
    }
}

/// Drives validation and simulated submission for one entry point
#[derive(Clone)]
pub struct FormWorkflow {
    shared: Arc<Shared>,
    submit_delay: Duration,
}

impl FormWorkflow {
    pub fn contact(entry: Arc<dyn EntryPoint>, presenter: Arc<dyn MessagePresenter>) -> Self {
        Self::new(FormKind::Contact, entry, presenter, None)
    }

    pub fn appointment(
        entry: Arc<dyn EntryPoint>,
        presenter: Arc<dyn MessagePresenter>,
        modal: Arc<dyn ModalController>,
    ) -> Self {
        Self::new(FormKind::Appointment, entry, presenter, Some(modal))
    }

    fn new(
        kind: FormKind,
        entry: Arc<dyn EntryPoint>,
        presenter: Arc<dyn MessagePresenter>,
        modal: Option<Arc<dyn ModalController>>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                kind,
                machine: Mutex::new(SubmissionLifecycle::new(kind).state_machine()),
                entry,
                presenter,
                modal,
            }),
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn kind(&self) -> FormKind {
        self.shared.kind
    }

    pub fn state(&self) -> WorkflowState {
        WorkflowState::from(self.shared.machine().state())
    }

    /// Number of submissions that ran to completion on this entry point
    pub fn completed_submissions(&self) -> u32 {
        self.shared.machine().inner().completed()
    }

    pub fn validate(&self, record: &SubmissionRecord) -> Result<ValidatedRecord, ValidationError> {
        validate(record)
    }

    /// Entry point submit handler: validate, then either report the problem
    /// or start the simulated submission.
    pub fn process(&self, record: &SubmissionRecord) -> Result<SubmissionHandle, WorkflowError> {
        match validate(record) {
            Ok(validated) => self.submit(validated),
            Err(error) => {
                self.report_validation_failure(&error);
                self.shared.machine().handle(&WorkflowEvent::Reject);
                Err(error.into())
            }
        }
    }

    /// Start the simulated submission and return immediately.
    ///
    /// The completion deadline is fixed here, before the task is spawned, so
    /// it never depends on when the runtime first polls the task. Outside a
    /// tokio runtime nothing is touched and `NoRuntime` is returned.
    pub fn submit(&self, record: ValidatedRecord) -> Result<SubmissionHandle, WorkflowError> {
        let kind = self.shared.kind;
        let runtime = Handle::try_current().map_err(|_| {
            warn!(form.kind = %kind, "Submit called outside a tokio runtime");
            WorkflowError::NoRuntime { kind }
        })?;
        let correlation_id = generate_correlation_id();

        {
            let mut machine = self.shared.machine();
            if !WorkflowState::from(machine.state()).accepts_submission() {
                warn!(form.kind = %kind, "Submit ignored while a submission is in flight");
                return Err(WorkflowError::SubmissionInFlight { kind });
            }
            machine.handle(&WorkflowEvent::Submit {
                correlation_id: correlation_id.clone(),
            });
        }

        let original_label = self.shared.entry.submit_label();
        self.shared.entry.set_submit_enabled(false);
        self.shared.entry.set_submit_label(kind.progress_label());

        let deadline = Instant::now() + self.submit_delay;
        let span = create_submission_span(kind, &correlation_id);
        info!(
            parent: &span,
            fields = record.record().fields().count(),
            delay_ms = self.submit_delay.as_millis() as u64,
            "Simulated submission armed"
        );

        let shared = Arc::clone(&self.shared);
        let task_correlation_id = correlation_id.clone();
        let task = runtime.spawn(
            async move {
                sleep_until(deadline).await;
                shared.complete(task_correlation_id, original_label)
            }
            .instrument(span),
        );

        Ok(SubmissionHandle {
            correlation_id,
            task,
        })
    }

    /// Present the localized message for a rejected record. The workflow
    /// state is left untouched.
    pub fn report_validation_failure(&self, error: &ValidationError) {
        warn!(form.kind = %self.shared.kind, error = ?error, "Submission rejected by validation");
        self.shared
            .presenter
            .display(&error.to_string(), Severity::Error);
    }

    /// The form was cleared. Has no effect while a submission is in flight.
    pub fn reset(&self) {
        self.shared.machine().handle(&WorkflowEvent::Reset);
    }
}

/// Awaitable completion of one simulated submission.
///
/// Dropping the handle does not cancel the submission.
#[derive(Debug)]
pub struct SubmissionHandle {
    correlation_id: String,
    task: JoinHandle<SubmissionOutcome>,
}

impl SubmissionHandle {
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn wait(self) -> Result<SubmissionOutcome, WorkflowError> {
        self.task.await.map_err(|_| WorkflowError::Interrupted {
            correlation_id: self.correlation_id,
        })
    }
}
