use std::sync::Arc;

use anyhow::Result;

use crate::cli::commands::print_message;
use crate::cli::FieldArgs;
use crate::config::WorkflowConfig;
use crate::forms::{EntryPoint, FormKind, FormWorkflow, WorkflowError};
use crate::ui::{AppointmentModal, FormSurface, MessageBoard};

pub struct SubmitCommand {
    kind: FormKind,
    fields: FieldArgs,
    json: bool,
}

impl SubmitCommand {
    pub fn new(kind: FormKind, fields: FieldArgs) -> Self {
        Self {
            kind,
            fields,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub async fn execute(&self, settings: &WorkflowConfig) -> Result<()> {
        let board = MessageBoard::new(settings.message_dismiss());
        let modal = AppointmentModal::attach(&board);
        let surface = Arc::new(FormSurface::new(self.kind));

        for (field, value) in self.fields.entries() {
            surface.input(field, value);
        }

        let workflow = match self.kind {
            FormKind::Contact => FormWorkflow::contact(surface.clone(), Arc::new(board.clone())),
            FormKind::Appointment => {
                modal.open();
                FormWorkflow::appointment(
                    surface.clone(),
                    Arc::new(board.clone()),
                    Arc::new(modal.clone()),
                )
            }
        }
        .with_submit_delay(settings.submit_delay());

        match workflow.process(&surface.record()) {
            Ok(handle) => {
                println!("⏳ {}", surface.submit_label());
                let outcome = handle.wait().await?;

                if self.json {
                    println!(
                        "{}",
                        serde_json::json!({
                            "kind": outcome.kind,
                            "correlation_id": outcome.correlation_id,
                            "message": outcome.message,
                            "state": workflow.state(),
                        })
                    );
                } else if let Some(message) = board.current() {
                    print_message(&message);
                }
                Ok(())
            }
            Err(WorkflowError::Validation(error)) => {
                if let Some(message) = board.current() {
                    print_message(&message);
                }
                Err(error.into())
            }
            Err(other) => Err(other.into()),
        }
    }
}
