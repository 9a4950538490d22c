use anyhow::Result;

use crate::config::StudioConfig;
use crate::fields::{format_phone_number, min_appointment_date_attribute, whatsapp_link};

pub struct FormatPhoneCommand {
    phone: String,
}

impl FormatPhoneCommand {
    pub fn new(phone: String) -> Self {
        Self { phone }
    }

    pub async fn execute(&self) -> Result<()> {
        println!("{}", format_phone_number(&self.phone));
        Ok(())
    }
}

pub struct WhatsappCommand {
    message: Option<String>,
}

impl WhatsappCommand {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    pub async fn execute(&self, studio: &StudioConfig) -> Result<()> {
        let message = self
            .message
            .as_deref()
            .unwrap_or(&studio.whatsapp_greeting);
        let link = whatsapp_link(&studio.whatsapp_number, message)?;

        println!("💬 {link}");
        Ok(())
    }
}

/// Prints the `min` value for appointment date inputs
pub struct MinDateCommand;

impl MinDateCommand {
    pub async fn execute(&self) -> Result<()> {
        println!("{}", min_appointment_date_attribute());
        Ok(())
    }
}
