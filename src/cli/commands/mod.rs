use crate::forms::Severity;
use crate::ui::PlacedMessage;

pub mod config;
pub mod submit;
pub mod tools;
pub mod validate;

pub use config::ConfigCommand;
pub use submit::SubmitCommand;
pub use tools::{FormatPhoneCommand, MinDateCommand, WhatsappCommand};
pub use validate::ValidateCommand;

pub(crate) fn print_message(message: &PlacedMessage) {
    let icon = match message.severity {
        Severity::Success => "✅",
        Severity::Error => "❌",
    };
    println!("{icon} [{}] {}", message.form, message.text);
}
