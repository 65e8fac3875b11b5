//! Bot configuration: TelegramConfig (token, API URL, log file) + LinkConfig (mini-app, banner, links).

mod bot_config;
mod links;


pub use bot_config::BotConfig;
pub use links::{InvalidLink, LinkConfig};
