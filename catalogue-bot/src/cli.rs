//! Command line: `catalogue-bot run [--token <TOKEN>]`.

use catalogue_telegram::ConfigError;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "catalogue-bot")]
#[command(about = "Telegram catalogue bot: greeting, info panel, mini-app orders", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads the full config from env, with `token` taking precedence over the env token.
pub fn load_config(token: Option<String>) -> Result<BotConfig, ConfigError> {
    BotConfig::load(token)
}
