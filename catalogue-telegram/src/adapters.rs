//! Adapters from Telegram (teloxide) types to catalogue_core types.
//! Depends only on teloxide and catalogue_core type definitions.

use catalogue_core::{Chat, InboundEvent, MessageRef, ToCoreEvent, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message together with the bot's own username (used to resolve `/cmd@bot`).
/// Yields a web-app payload event, a command event, or nothing.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message, pub Option<&'a str>);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<InboundEvent> {
        let msg = self.0;
        let sender = msg
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or_else(|| User {
                id: 0,
                username: None,
                first_name: None,
                last_name: None,
            });
        let chat = Chat { id: msg.chat.id.0 };

        if let Some(web_app_data) = msg.web_app_data() {
            return Some(InboundEvent::StructuredPayload {
                raw: web_app_data.data.clone(),
                sender,
                source: MessageRef {
                    chat,
                    message_id: msg.id.0,
                },
            });
        }

        let name = msg.text().and_then(|text| parse_command(text, self.1))?;
        Some(InboundEvent::Command { name, sender, chat })
    }
}

/// Wraps a teloxide CallbackQuery. Queries without data (game buttons) yield nothing.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<InboundEvent> {
        let query = self.0;
        let data = query.data.clone()?;
        let source = query.message.as_ref().map(|m| MessageRef {
            chat: Chat { id: m.chat().id.0 },
            message_id: m.id().0,
        });
        Some(InboundEvent::CallbackTrigger {
            query_id: query.id.0.clone(),
            data,
            sender: TelegramUserWrapper(&query.from).to_core(),
            source,
        })
    }
}

/// Extracts the command name from a message text: `/Start@my_bot arg` gives `start`.
///
/// Returns `None` when the text is not a command, or when the `@` suffix names a bot other than
/// `bot_username` (or `bot_username` is unknown).
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<String> {
    let token = text.strip_prefix('/')?.split(char::is_whitespace).next()?;
    let name = match token.split_once('@') {
        Some((name, target)) => match bot_username {
            Some(me) if target.eq_ignore_ascii_case(me) => name,
            _ => return None,
        },
        None => token,
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_lowercase())
    }
}
