use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::forms::{FormKind, SubmissionRecord};

pub mod commands;

#[derive(Parser)]
#[command(name = "belleza")]
#[command(about = "Contact and appointment forms for Belleza Studio")]
#[command(long_about = "Validates contact and appointment requests the way the Belleza Studio site does, \
                       and runs the simulated submission end to end. Start with 'belleza validate --name ...' \
                       to check a request.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a request without submitting it
    Validate {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Validate and submit a request through the simulated workflow
    Submit {
        /// Which form the request comes from
        #[arg(long, value_enum, default_value = "contact", help = "Form to submit: contact or appointment")]
        kind: KindArg,
        #[command(flatten)]
        fields: FieldArgs,
        /// Print the outcome as JSON
        #[arg(long, help = "Print the submission outcome as JSON")]
        json: bool,
    },
    /// Apply the phone mask to a number
    FormatPhone {
        /// Digits as typed
        phone: String,
    },
    /// Print the WhatsApp link for the studio
    Whatsapp {
        /// Message to prefill instead of the configured greeting
        #[arg(long, help = "Override the configured greeting")]
        message: Option<String>,
    },
    /// Print the earliest date an appointment can be booked for
    MinDate,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Contact,
    Appointment,
}

impl From<KindArg> for FormKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Contact => FormKind::Contact,
            KindArg::Appointment => FormKind::Appointment,
        }
    }
}

/// Form fields accepted on the command line
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long, help = "Visitor name")]
    pub name: Option<String>,
    #[arg(long, help = "Phone number, digits or masked")]
    pub phone: Option<String>,
    #[arg(long, help = "E-mail address")]
    pub email: Option<String>,
    #[arg(long, help = "Requested service")]
    pub service: Option<String>,
    #[arg(long, help = "Requested date (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[arg(long, help = "Requested time (HH:MM)")]
    pub time: Option<String>,
}

impl FieldArgs {
    /// Fields given on the command line, in form order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("service", &self.service),
            ("date", &self.date),
            ("time", &self.time),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    pub fn to_record(&self) -> SubmissionRecord {
        self.entries().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_command() {
        let cli = Cli::try_parse_from([
            "belleza",
            "submit",
            "--kind",
            "appointment",
            "--name",
            "Ana",
            "--phone",
            "11912345678",
            "--email",
            "ana@example.com",
            "--service",
            "corte",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit { kind, fields, json } => {
                assert_eq!(FormKind::from(kind), FormKind::Appointment);
                assert!(!json);
                let record = fields.to_record();
                assert_eq!(record.get("service"), Some("corte"));
                assert_eq!(record.get("date"), None);
            }
            _ => panic!("expected submit command"),
        }
    }

    #[test]
    fn test_whatsapp_and_min_date_are_separate_commands() {
        let cli = Cli::try_parse_from(["belleza", "whatsapp", "--message", "Oi"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Whatsapp { message: Some(ref m) } if m == "Oi"
        ));

        let cli = Cli::try_parse_from(["belleza", "min-date"]).unwrap();
        assert!(matches!(cli.command, Commands::MinDate));
    }

    #[test]
    fn test_absent_fields_are_left_out_of_record() {
        let fields = FieldArgs {
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.entries(), vec![("name", "Ana")]);
    }
}
