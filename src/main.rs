use anyhow::Result;
use clap::Parser;

use belleza_forms::cli::commands::{
    ConfigCommand, FormatPhoneCommand, MinDateCommand, SubmitCommand, ValidateCommand,
    WhatsappCommand,
};
use belleza_forms::cli::{Cli, Commands};
use belleza_forms::{config, init_telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config()?;
    init_telemetry(&settings.observability)?;

    tokio::runtime::Runtime::new()?.block_on(async {
        match cli.command {
            Commands::Validate { fields } => ValidateCommand::new(fields).execute().await,
            Commands::Submit { kind, fields, json } => {
                SubmitCommand::new(kind.into(), fields)
                    .with_json(json)
                    .execute(&settings.workflow)
                    .await
            }
            Commands::FormatPhone { phone } => FormatPhoneCommand::new(phone).execute().await,
            Commands::Whatsapp { message } => {
                WhatsappCommand::new(message).execute(&settings.studio).await
            }
            Commands::MinDate => MinDateCommand.execute().await,
            Commands::Config => ConfigCommand.execute(settings).await,
        }
    })
}
