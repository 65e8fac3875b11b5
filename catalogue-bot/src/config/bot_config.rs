//! BotConfig: TelegramConfig + LinkConfig. Use load() for env-based loading.

use catalogue_telegram::{ConfigError, TelegramConfig};

use super::LinkConfig;

/// Full bot config, loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub links: LinkConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides the env token when given.
    /// Fails only when no token is available.
    pub fn load(token: Option<String>) -> Result<Self, ConfigError> {
        let telegram = TelegramConfig::from_env(token)?;
        let links = LinkConfig::from_env();
        Ok(Self { telegram, links })
    }

    /// Validate config. Call after load() to fail fast before polling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.telegram.validate()
    }

    pub fn telegram(&self) -> &TelegramConfig {
        &self.telegram
    }
    pub fn links(&self) -> &LinkConfig {
        &self.links
    }
    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn log_file(&self) -> Option<&str> {
        self.telegram.log_file.as_deref()
    }
}
