use anyhow::Result;
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub mod commands;
pub mod config;
pub mod download;
pub mod handlers;
pub mod job;
pub mod logging;
pub mod messages;
pub mod notify;
pub mod progress;
pub mod resolver;
pub mod split;

pub use commands::Command;
pub use config::Config;

/// Update routing. Public so integration tests dispatch through the same
/// schema as production.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry().branch(
        Update::filter_message().branch(
            dptree::entry().filter_command::<Command>().endpoint(
                |bot: Bot,
                 msg: Message,
                 cmd: Command,
                 cfg: Config,
                 http: reqwest::Client| async move {
                    cmd.dispatch(bot, msg, cfg, http).await
                },
            ),
        ),
    )
}

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    let cfg = Config::from_env()?;
    logging::init(&cfg.log_file)?;

    tracing::info!("Starting terabox video bot...");

    let bot = Bot::new(&cfg.bot_token);
    let http = reqwest::Client::new();

    // --- Dispatcher ---
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![cfg, http])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
