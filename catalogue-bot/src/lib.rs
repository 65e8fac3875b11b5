//! # Catalogue bot application
//!
//! Greets users with a banner and a keyboard that launches the catalogue mini-app, shows an
//! information panel, and acknowledges the orders the mini-app sends back. Wires config, the
//! [`CatalogueHandler`], and the Telegram transport from catalogue-telegram.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod keyboard;
pub mod payload;
pub mod replies;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{BotConfig, InvalidLink, LinkConfig};
pub use handlers::{CatalogueHandler, START_COMMAND};
pub use keyboard::build_greeting_keyboard;
pub use payload::{decode, DecodeError, OrderIntent, ProductRef};
pub use replies::{compose_ack, compose_greeting, compose_info, Greeting};
pub use runner::{build_handler, run_bot};
