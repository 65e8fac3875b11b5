//! Minimal transport config: token, optional API URL and log file path.
//! Loaded from env: TELEGRAM_BOT_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use reqwest::Url;
use std::env;
use thiserror::Error;

/// Configuration problems that must stop the process before it starts polling.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) is not set")]
    MissingToken,

    #[error("TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {0}")]
    InvalidApiUrl(String),
}

/// Reads an env var, treating unset, empty and whitespace-only values alike as absent.
pub fn read_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Telegram connectivity and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides the env token when given; a token is required.
    pub fn from_env(token: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| read_env("TELEGRAM_BOT_TOKEN"))
            .or_else(|| read_env("BOT_TOKEN"))
            .ok_or(ConfigError::MissingToken)?;
        let telegram_api_url =
            read_env("TELEGRAM_API_URL").or_else(|| read_env("TELOXIDE_API_URL"));
        let log_file = read_env("LOG_FILE");
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds config with the given token; other fields None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Checks the token is non-empty and the API URL, if set, parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        self.api_url().map(|_| ())
    }

    /// Creates the teloxide Bot, pointed at the configured API URL when there is one.
    pub fn build_bot(&self) -> Result<teloxide::Bot, ConfigError> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }

    fn api_url(&self) -> Result<Option<Url>, ConfigError> {
        self.telegram_api_url
            .as_deref()
            .map(|raw| Url::parse(raw).map_err(|_| ConfigError::InvalidApiUrl(raw.to_string())))
            .transpose()
    }
}
