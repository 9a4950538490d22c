use anyhow::Result;

use crate::cli::FieldArgs;
use crate::forms::{field_label, validate};

pub struct ValidateCommand {
    fields: FieldArgs,
}

impl ValidateCommand {
    pub fn new(fields: FieldArgs) -> Self {
        Self { fields }
    }

    pub async fn execute(&self) -> Result<()> {
        let record = self.fields.to_record();

        println!("🔍 Checking request...");
        for (field, value) in record.fields() {
            println!("   {}: {}", field_label(field), value);
        }
        println!();

        match validate(&record) {
            Ok(_) => {
                println!("✅ Request is valid and ready to submit");
                Ok(())
            }
            Err(error) => {
                println!("❌ {error}");
                Err(error.into())
            }
        }
    }
}
