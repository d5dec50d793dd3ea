//! Host configuration: optional `fieldkit.toml` plus `FIELDKIT_*` overrides.

use config::{Config, Environment, File};
use fieldkit_core::utils::PromptConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct CliConfig {
    /// Record File holding one user per line (restart required)
    pub records_path: PathBuf,

    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Environment: FIELDKIT_PROMPT__EOF_RETRY_LIMIT (unset retries forever)
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl CliConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config: CliConfig = Config::builder()
            .set_default("records_path", "records.txt")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("fieldkit").required(false))
            .add_source(
                Environment::with_prefix("FIELDKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.records_path.as_os_str().is_empty() {
            return Err(config::ConfigError::Message(
                "records_path cannot be empty".into(),
            ));
        }

        if self.prompt.eof_retry_limit == Some(0) {
            return Err(config::ConfigError::Message(
                "prompt.eof_retry_limit must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
