//! Polling dispatch loop: converts teloxide updates to core events and hands each one to the handler.
//! Calls getMe once before polling to learn the bot's username (for `/cmd@bot` commands).

use anyhow::Result;
use catalogue_core::{Handler, HandlerResponse, InboundEvent, ToCoreEvent};
use std::sync::Arc;
use teloxide::{dispatching::UpdateFilterExt, dptree, prelude::*, types::Update};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Dependencies shared by the dptree endpoints.
struct DispatchContext {
    handler: Arc<dyn Handler>,
    bot_username: Option<String>,
}

/// Runs the long-polling loop until Ctrl-C. Every update shares one distribution key, so events are
/// handled one at a time in arrival order. The bot (and its HTTP client) is dropped on return.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(username = ?username, "Bot identity resolved");
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; commands addressed with @suffix will be ignored");
            None
        }
    };

    let context = Arc::new(DispatchContext {
        handler,
        bot_username,
    });

    let tree = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    info!("Polling loop starting");
    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![context])
        .distribution_function(|_| Some(()))
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Ignoring unsupported update kind");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Polling loop stopped");

    Ok(())
}

async fn on_message(msg: Message, context: Arc<DispatchContext>) -> ResponseResult<()> {
    match TelegramMessageWrapper(&msg, context.bot_username.as_deref()).to_core() {
        Some(event) => handle_event(context.handler.as_ref(), &event).await,
        None => debug!(chat_id = msg.chat.id.0, "Message is neither a command nor a web-app payload"),
    }
    Ok(())
}

async fn on_callback_query(query: CallbackQuery, context: Arc<DispatchContext>) -> ResponseResult<()> {
    match TelegramCallbackWrapper(&query).to_core() {
        Some(event) => handle_event(context.handler.as_ref(), &event).await,
        None => debug!(user_id = query.from.id.0, "Callback query without data"),
    }
    Ok(())
}

/// Runs the handler on one event and logs the outcome. Errors stop here so the loop keeps going.
pub async fn handle_event(handler: &dyn Handler, event: &InboundEvent) {
    let user_id = event.sender().id;
    let kind = event.kind();
    info!(user_id, kind, "Received event");

    match handler.handle(event).await {
        Ok(HandlerResponse::Handled) => debug!(user_id, kind, "Event handled"),
        Ok(HandlerResponse::Ignored) => debug!(user_id, kind, "No route for event, ignored"),
        Err(e) => error!(error = %e, user_id, kind, "Handler failed"),
    }
}
