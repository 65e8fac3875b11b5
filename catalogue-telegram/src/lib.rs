//! # catalogue-telegram
//!
//! Telegram transport layer: adapters from teloxide updates to [`catalogue_core::InboundEvent`],
//! a [`catalogue_core::Bot`] implementation, minimal config, and the polling dispatch loop.
//! Handles only Telegram connectivity; routing and reply content live in the application crate.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{
    parse_command, TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{to_inline_keyboard, TelegramBotAdapter, PLACEHOLDER_CALLBACK_DATA};
pub use config::{read_env, ConfigError, TelegramConfig};
pub use runner::{handle_event, run_dispatcher};
