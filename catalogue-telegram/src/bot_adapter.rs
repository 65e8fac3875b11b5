//! Wraps teloxide::Bot and implements [`catalogue_core::Bot`]. Production code sends messages via
//! Telegram; tests substitute another Bot impl or point the API URL at a mock server.

use async_trait::async_trait;
use catalogue_core::{Bot as CoreBot, BotError, ButtonAction, Chat, Keyboard, OutboundMessage, Result};
use reqwest::Url;
use teloxide::{
    prelude::*,
    types::{
        CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile,
        LinkPreviewOptions, ParseMode, WebAppInfo,
    },
};

/// Callback data carried by placeholder buttons. No route answers it.
pub const PLACEHOLDER_CALLBACK_DATA: &str = "no_action";

/// Thin wrapper around teloxide::Bot that implements the core Bot trait. Every text and caption is
/// sent with HTML parse mode.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| BotError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Renders a core [`Keyboard`] as a Telegram inline keyboard.
/// Fails with [`BotError::InvalidUrl`] when a link or app button carries an unparsable URL.
pub fn to_inline_keyboard(keyboard: &Keyboard) -> Result<InlineKeyboardMarkup> {
    let mut rows = Vec::with_capacity(keyboard.rows.len());
    for row in &keyboard.rows {
        let mut buttons = Vec::with_capacity(row.len());
        for button in row {
            let label = button.label.clone();
            let rendered = match &button.action {
                ButtonAction::ExternalLink(url) => InlineKeyboardButton::url(label, parse_url(url)?),
                ButtonAction::EmbeddedApp(url) => InlineKeyboardButton::web_app(
                    label,
                    WebAppInfo {
                        url: parse_url(url)?,
                    },
                ),
                ButtonAction::Callback(data) => InlineKeyboardButton::callback(label, data.clone()),
                ButtonAction::Placeholder => {
                    InlineKeyboardButton::callback(label, PLACEHOLDER_CALLBACK_DATA)
                }
            };
            buttons.push(rendered);
        }
        rows.push(buttons);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, chat: &Chat, message: &OutboundMessage) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(chat.id), message.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = &message.keyboard {
            request = request.reply_markup(to_inline_keyboard(keyboard)?);
        }
        if message.disable_link_preview {
            request = request.link_preview_options(disabled_link_preview());
        }
        request
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo_url: &str, caption: &OutboundMessage) -> Result<()> {
        let photo = InputFile::url(parse_url(photo_url)?);
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), photo)
            .caption(caption.text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(keyboard) = &caption.keyboard {
            request = request.reply_markup(to_inline_keyboard(keyboard)?);
        }
        request
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        Ok(())
    }
}
