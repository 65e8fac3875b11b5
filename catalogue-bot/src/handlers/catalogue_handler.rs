//! Catalogue handler: routes `/start`, the info button, and mini-app payloads to their replies.

use async_trait::async_trait;
use catalogue_core::{Bot, Chat, Handler, HandlerResponse, InboundEvent, MessageRef, Result, User};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::config::LinkConfig;
use crate::keyboard::SHOW_INFO;
use crate::payload::{decode, DecodeError};
use crate::replies::{compose_ack, compose_greeting, compose_info};

pub const START_COMMAND: &str = "start";

/// Routes the three event kinds. Anything else (unknown command, unknown callback data) is
/// ignored without sending anything.
#[derive(Clone)]
pub struct CatalogueHandler {
    links: Arc<LinkConfig>,
    bot: Arc<dyn Bot>,
}

impl CatalogueHandler {
    pub fn new(links: Arc<LinkConfig>, bot: Arc<dyn Bot>) -> Self {
        Self { links, bot }
    }

    /// Sends the welcome as a photo when a banner is configured, then as text if the photo fails.
    /// A failure of the text send is returned.
    #[instrument(skip(self, sender, chat), fields(user_id = sender.id))]
    async fn greet(&self, sender: &User, chat: &Chat) -> Result<()> {
        info!(
            username = sender.username.as_deref().unwrap_or(""),
            chat_id = chat.id,
            "/start received"
        );
        let greeting = compose_greeting(sender, &self.links);

        if let Some(banner_url) = &greeting.banner_url {
            match self.bot.send_photo(chat, banner_url, &greeting.message).await {
                Ok(()) => return Ok(()),
                Err(e) => error!(
                    error = %e,
                    banner_url = %banner_url,
                    "Failed to send welcome photo, sending text only"
                ),
            }
        }

        self.bot.send_text(chat, &greeting.message).await
    }

    /// Acknowledges the button press, then posts the info panel in the button's chat.
    #[instrument(skip(self, source))]
    async fn show_info(&self, query_id: &str, source: Option<&MessageRef>) -> Result<()> {
        if let Err(e) = self.bot.answer_callback(query_id).await {
            warn!(error = %e, "Failed to acknowledge callback");
        }

        let Some(source) = source else {
            warn!("Info requested from an inaccessible message, nowhere to reply");
            return Ok(());
        };
        self.bot.send_text(&source.chat, &compose_info()).await
    }

    /// Decodes the mini-app payload and answers it. Delivery failures are logged, not returned.
    #[instrument(skip(self, raw, sender, source), fields(user_id = sender.id))]
    async fn acknowledge_payload(&self, raw: &str, sender: &User, source: &MessageRef) {
        info!(
            username = sender.username.as_deref().unwrap_or(""),
            data = %raw,
            "Mini-app data received"
        );

        let decoded = decode(raw);
        match &decoded {
            Ok(intent) => info!(intent = ?intent, "Mini-app payload decoded"),
            Err(DecodeError::Malformed { raw, reason }) => {
                error!(data = %raw, reason = %reason, "Could not decode mini-app JSON")
            }
            Err(e @ DecodeError::UnexpectedShape { .. }) => {
                error!(error = %e, "Unexpected error while processing mini-app data")
            }
        }

        if let Err(e) = self.bot.send_text(&source.chat, &compose_ack(&decoded)).await {
            error!(error = %e, chat_id = source.chat.id, "Failed to send mini-app acknowledgment");
        }
    }
}

#[async_trait]
impl Handler for CatalogueHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        match event {
            InboundEvent::Command { name, sender, chat } if name == START_COMMAND => {
                self.greet(sender, chat).await?;
            }
            InboundEvent::CallbackTrigger {
                query_id,
                data,
                source,
                ..
            } if data == SHOW_INFO => {
                self.show_info(query_id, source.as_ref()).await?;
            }
            InboundEvent::StructuredPayload {
                raw,
                sender,
                source,
            } => {
                self.acknowledge_payload(raw, sender, source).await;
            }
            _ => return Ok(HandlerResponse::Ignored),
        }
        Ok(HandlerResponse::Handled)
    }
}
