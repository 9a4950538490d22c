use belleza_forms::cli::commands::{
    FormatPhoneCommand, MinDateCommand, SubmitCommand, ValidateCommand, WhatsappCommand,
};
use belleza_forms::cli::FieldArgs;
use belleza_forms::config::{StudioConfig, WorkflowConfig};
use belleza_forms::{FormKind, ValidationError};

fn fields(name: &str, phone: &str, email: &str) -> FieldArgs {
    FieldArgs {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_validate_command_accepts_complete_request() {
    let command = ValidateCommand::new(fields("Ana", "11912345678", "ana@example.com"));
    tokio_test::assert_ok!(tokio_test::block_on(command.execute()));
}

#[test]
fn test_validate_command_surfaces_first_error() {
    let command = ValidateCommand::new(fields("Ana", "11912345678", "not-an-email"));
    let error = tokio_test::block_on(command.execute()).unwrap_err();
    assert_eq!(
        error.downcast_ref::<ValidationError>(),
        Some(&ValidationError::InvalidEmail)
    );
}

#[test]
fn test_format_phone_command_runs() {
    let command = FormatPhoneCommand::new("11912345678".to_string());
    tokio_test::assert_ok!(tokio_test::block_on(command.execute()));
}

#[test]
fn test_whatsapp_and_min_date_commands_run() {
    let whatsapp = WhatsappCommand::new(Some("Oi".to_string()));
    tokio_test::assert_ok!(tokio_test::block_on(whatsapp.execute(&StudioConfig::default())));
    tokio_test::assert_ok!(tokio_test::block_on(MinDateCommand.execute()));
}

#[tokio::test(start_paused = true)]
async fn test_submit_command_completes_with_configured_delay() {
    let settings = WorkflowConfig {
        submit_delay_ms: 10,
        message_dismiss_ms: 50,
    };
    let command = SubmitCommand::new(
        FormKind::Appointment,
        fields("Bia", "21987654321", "bia@example.com"),
    )
    .with_json(true);

    assert!(command.execute(&settings).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_submit_command_rejects_invalid_request() {
    let settings = WorkflowConfig::default();
    let command = SubmitCommand::new(FormKind::Contact, fields("Ana", "123", "ana@example.com"));

    let error = command.execute(&settings).await.unwrap_err();
    assert_eq!(
        error.downcast_ref::<ValidationError>(),
        Some(&ValidationError::InvalidPhone)
    );
}
