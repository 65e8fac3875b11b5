//! Mock implementation of [`catalogue_core::Bot`] for integration tests.
//!
//! Records every outbound call in order so tests can assert on what was sent without hitting
//! Telegram. Individual call kinds can be told to fail.

use async_trait::async_trait;
use catalogue_core::{Bot, BotError, Chat, OutboundMessage, Result};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentCall {
    Text {
        chat_id: i64,
        message: OutboundMessage,
    },
    Photo {
        chat_id: i64,
        photo_url: String,
        caption: OutboundMessage,
    },
    Ack {
        callback_id: String,
    },
}

/// Mock Bot that records calls; `fail_*` flags make the matching call return a Delivery error
/// (the call is still recorded as attempted).
#[derive(Default)]
pub struct MockBot {
    pub calls: Mutex<Vec<SentCall>>,
    pub fail_text: bool,
    pub fail_photo: bool,
    pub fail_ack: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_photo() -> Self {
        Self {
            fail_photo: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SentCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SentCall, fail: bool) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if fail {
            Err(BotError::Delivery("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, chat: &Chat, message: &OutboundMessage) -> Result<()> {
        self.record(
            SentCall::Text {
                chat_id: chat.id,
                message: message.clone(),
            },
            self.fail_text,
        )
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &OutboundMessage) -> Result<()> {
        self.record(
            SentCall::Photo {
                chat_id: chat.id,
                photo_url: photo_url.to_string(),
                caption: caption.clone(),
            },
            self.fail_photo,
        )
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.record(
            SentCall::Ack {
                callback_id: callback_id.to_string(),
            },
            self.fail_ack,
        )
    }
}
