//! Binary for the catalogue bot.

use anyhow::Result;
use catalogue_bot::{load_config, run_bot, Cli, Commands};
use catalogue_core::init_tracing;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = match load_config(token) {
                Ok(config) => config,
                Err(e) => {
                    let _ = init_tracing(None);
                    error!(error = %e, "Fatal configuration error, not starting");
                    return Err(e.into());
                }
            };
            run_bot(config).await
        }
    }
}
