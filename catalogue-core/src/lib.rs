//! # catalogue-core
//!
//! Core types and traits for the catalogue bot: [`Bot`], [`Handler`], inbound events, keyboards and
//! outbound messages, plus tracing initialization. Transport-agnostic; used by catalogue-telegram and
//! catalogue-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod markup;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use markup::{Button, ButtonAction, Keyboard, OutboundMessage};
pub use types::{
    Chat, Handler, HandlerResponse, InboundEvent, MessageRef, ToCoreEvent, ToCoreUser, User,
};
