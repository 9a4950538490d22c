use statig::prelude::*;

use crate::forms::types::{FormKind, WorkflowState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// A validated record was handed to the workflow
    Submit { correlation_id: String },
    /// The simulated delay elapsed
    Complete,
    /// Validation rejected the record
    Reject,
    /// The form was cleared
    Reset,
}

/// Context for one entry point's submission lifecycle
#[derive(Debug)]
pub struct SubmissionLifecycle {
    kind: FormKind,
    correlation_id: Option<String>,
    completed: u32,
    rejected: u32,
}

impl SubmissionLifecycle {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            correlation_id: None,
            completed: 0,
            rejected: 0,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Correlation id of the submission in flight or last completed
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    fn begin(&mut self, correlation_id: &str) -> Outcome<State> {
        self.correlation_id = Some(correlation_id.to_string());
        tracing::info!(
            form.kind = %self.kind,
            correlation.id = %correlation_id,
            "Submission started"
        );
        Transition(State::submitting())
    }

    fn reject(&mut self) -> Outcome<State> {
        self.rejected += 1;
        tracing::debug!(form.kind = %self.kind, rejected = self.rejected, "Submission rejected");
        Transition(State::failed())
    }
}

#[state_machine(initial = "State::idle()")]
impl SubmissionLifecycle {
    #[state]
    fn idle(&mut self, event: &WorkflowEvent) -> Outcome<State> {
        match event {
            WorkflowEvent::Submit { correlation_id } => self.begin(correlation_id),
            WorkflowEvent::Reject => self.reject(),
            _ => Handled,
        }
    }

    #[state]
    fn submitting(&mut self, event: &WorkflowEvent) -> Outcome<State> {
        match event {
            WorkflowEvent::Complete => {
                self.completed += 1;
                tracing::info!(
                    form.kind = %self.kind,
                    correlation.id = ?self.correlation_id,
                    "Submission completed"
                );
                Transition(State::succeeded())
            }
            // In-flight submissions cannot be restarted, rejected or reset
            _ => Handled,
        }
    }

    #[state]
    fn succeeded(&mut self, event: &WorkflowEvent) -> Outcome<State> {
        match event {
            WorkflowEvent::Submit { correlation_id } => self.begin(correlation_id),
            WorkflowEvent::Reject => self.reject(),
            WorkflowEvent::Reset => Transition(State::idle()),
            _ => Handled,
        }
    }

    #[state]
    fn failed(&mut self, event: &WorkflowEvent) -> Outcome<State> {
        match event {
            WorkflowEvent::Submit { correlation_id } => self.begin(correlation_id),
            WorkflowEvent::Reject => {
                self.rejected += 1;
                Handled
            }
            WorkflowEvent::Reset => Transition(State::idle()),
            _ => Handled,
        }
    }
}

impl From<&State> for WorkflowState {
    fn from(state: &State) -> Self {
        match state {
            State::Idle { .. } => WorkflowState::Idle,
            State::Submitting { .. } => WorkflowState::Submitting,
            State::Succeeded { .. } => WorkflowState::Succeeded,
            State::Failed { .. } => WorkflowState::Failed,
        }
    }
}
