//! Delivery channel abstraction.
//!
//! [`Bot`] is transport-agnostic; catalogue-telegram implements it on top of teloxide and tests
//! substitute recording mocks.

use crate::error::Result;
use crate::markup::OutboundMessage;
use crate::types::Chat;
use async_trait::async_trait;

/// Outbound calls available to handlers. Text bodies and captions are in the platform's HTML subset.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message (with its optional keyboard) to the given chat.
    async fn send_text(&self, chat: &Chat, message: &OutboundMessage) -> Result<()>;
    /// Sends an image fetched by the platform from `photo_url`, using `caption` as text and keyboard.
    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &OutboundMessage) -> Result<()>;
    /// Acknowledges a callback trigger so the client stops showing its loading state. Carries no body.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
