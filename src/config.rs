use anyhow::Result;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for Belleza Forms
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BellezaConfig {
    /// Submission workflow timing
    pub workflow: WorkflowConfig,
    /// Studio contact details
    pub studio: StudioConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Simulated submission latency
    pub submit_delay_ms: u64,
    /// How long presented messages stay visible
    pub message_dismiss_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudioConfig {
    /// WhatsApp number in international format, digits only
    pub whatsapp_number: String,
    /// Message prefilled in the WhatsApp chat
    pub whatsapp_greeting: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON
    pub json_logs: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            message_dismiss_ms: 5000,
        }
    }
}

impl WorkflowConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn message_dismiss(&self) -> Duration {
        Duration::from_millis(self.message_dismiss_ms)
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "5511999999999".to_string(),
            whatsapp_greeting: "Olá! Gostaria de agendar um horário no Belleza Studio."
                .to_string(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

impl BellezaConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (belleza.toml, .belleza-rc)
    /// 3. Environment variables (prefixed with BELLEZA_, sections split by __)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("belleza.toml").exists() {
            builder = builder.add_source(File::with_name("belleza"));
        }

        if Path::new(".belleza-rc").exists() {
            builder = builder.add_source(File::with_name(".belleza-rc").format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("BELLEZA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load from an explicit file on top of the defaults, ignoring the environment
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<BellezaConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = BellezaConfig::load_env_file();
        BellezaConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static BellezaConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
