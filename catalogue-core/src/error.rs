//! Error types for the bot core.

use thiserror::Error;

/// Errors raised by a [`crate::Bot`] implementation.
#[derive(Error, Debug)]
pub enum BotError {
    /// An outbound call (text, photo, acknowledgment) did not go through.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// A button or media URL the transport cannot use.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BotError>;
