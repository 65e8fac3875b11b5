//! Core types: user, chat, message reference, inbound events, handler response, and Handler trait.

use async_trait::async_trait;

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space; falls back to the username, then to the numeric id.
    pub fn full_name(&self) -> String {
        let names: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if !names.is_empty() {
            return names.join(" ");
        }
        match &self.username {
            Some(username) if !username.is_empty() => username.clone(),
            _ => self.id.to_string(),
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
}

/// Points at a message already delivered to a chat (the one carrying a button, or carrying a payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub chat: Chat,
    pub message_id: i32,
}

/// One inbound platform update, already reduced to the three kinds the bot reacts to.
/// Built per update by the transport adapter and consumed once by a [`Handler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Slash command; `name` has no leading slash and no `@bot` suffix.
    Command { name: String, sender: User, chat: Chat },
    /// Inline button press. `query_id` is what gets acknowledged, `data` is the route.
    /// `source` is `None` when the message carrying the button is no longer accessible.
    CallbackTrigger {
        query_id: String,
        data: String,
        sender: User,
        source: Option<MessageRef>,
    },
    /// Raw text sent back by the mini-application.
    StructuredPayload {
        raw: String,
        sender: User,
        source: MessageRef,
    },
}

impl InboundEvent {
    pub fn sender(&self) -> &User {
        match self {
            InboundEvent::Command { sender, .. }
            | InboundEvent::CallbackTrigger { sender, .. }
            | InboundEvent::StructuredPayload { sender, .. } => sender,
        }
    }

    /// Chat a reply to this event goes to, if there is one.
    pub fn chat(&self) -> Option<&Chat> {
        match self {
            InboundEvent::Command { chat, .. } => Some(chat),
            InboundEvent::CallbackTrigger { source, .. } => source.as_ref().map(|s| &s.chat),
            InboundEvent::StructuredPayload { source, .. } => Some(&source.chat),
        }
    }

    /// Short kind name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Command { .. } => "command",
            InboundEvent::CallbackTrigger { .. } => "callback",
            InboundEvent::StructuredPayload { .. } => "payload",
        }
    }
}

/// Handler outcome. `Ignored` means no route matched and nothing was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    Handled,
    Ignored,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update to an [`InboundEvent`]; `None` when the update is not one
/// of the kinds the bot reacts to.
pub trait ToCoreEvent: Send + Sync {
    fn to_core(&self) -> Option<InboundEvent>;
}

/// Handles one inbound event to completion, side-effecting through a [`crate::Bot`].
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, event: &InboundEvent) -> crate::error::Result<HandlerResponse>;
}
