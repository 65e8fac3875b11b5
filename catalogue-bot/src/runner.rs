//! Wires config, the Telegram adapter and the catalogue handler into the polling loop.

use anyhow::Result;
use catalogue_core::{init_tracing, Bot, Handler};
use catalogue_telegram::{run_dispatcher, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::CatalogueHandler;

/// Builds the catalogue handler over any [`Bot`]; tests pass a recording mock.
pub fn build_handler(config: &BotConfig, bot: Arc<dyn Bot>) -> Arc<dyn Handler> {
    Arc::new(CatalogueHandler::new(Arc::new(config.links().clone()), bot))
}

/// Main entry: init logging, validate config, build the Telegram bot and handler, then poll until
/// shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(config.log_file())?;
    config.validate()?;
    config.links().report();

    info!(
        api_url = config.telegram().telegram_api_url.as_deref().unwrap_or("default"),
        "Initializing bot"
    );

    let teloxide_bot = config.telegram().build_bot()?;
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler = build_handler(&config, adapter);

    info!("Bot started successfully");

    run_dispatcher(teloxide_bot, handler).await?;

    info!("Bot stopped");
    Ok(())
}
