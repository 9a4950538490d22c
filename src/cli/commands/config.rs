use anyhow::Result;

use crate::config::BellezaConfig;

pub struct ConfigCommand;

impl ConfigCommand {
    pub async fn execute(&self, config: &BellezaConfig) -> Result<()> {
        print!("{}", toml::to_string_pretty(config)?);
        Ok(())
    }
}
