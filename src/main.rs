use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use formbot::cli::{Cli, Commands};
use formbot::core::{config, init_logger, sanitize, AuditLogs, BotConfig};
use formbot::form::{Controller, FormSettings};
use formbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TeloxideTransport};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics from dispatcher tasks instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::log_file_path())?;

    let result = match cli.command {
        Some(Commands::CheckConfig) => check_config(),
        Some(Commands::Run) | None => run_bot().await,
    };

    if let Err(e) = &result {
        log::error!("Fatal error: {}", sanitize(&e.to_string()));
    }
    result
}

/// Validate configuration without connecting to Telegram
fn check_config() -> Result<()> {
    let config = BotConfig::from_env()?;
    println!("✅ Configuration OK: {}", config.summary());
    println!(
        "   Info document present: {}",
        config.info_document.exists()
    );
    Ok(())
}

/// Run the bot until Ctrl-C
async fn run_bot() -> Result<()> {
    log::info!("🚀 Starting bot...");

    // Fail fast before touching the network
    let bot_config = BotConfig::from_env()?;
    let bot = create_bot(&bot_config)?;

    let me = bot.get_me().await?;
    log::info!("Bot started: @{}", sanitize(me.username()));
    log::info!("Admin chat: {}", bot_config.admin_chat_id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let audit = AuditLogs::open(&bot_config)?;
    let transport = Arc::new(TeloxideTransport::new(bot.clone()));
    let controller = Arc::new(Controller::new(
        transport,
        audit,
        FormSettings::from_config(&bot_config),
    ));

    let handler = schema(HandlerDeps::new(controller));

    // Polling listener drops updates that piled up while the bot was down
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    log::info!("📡 Starting bot in long polling mode");
    Dispatcher::builder(bot, handler)
        .default_handler(|update| async move {
            log::debug!("Unhandled update: {:?}", update.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Bot stopped by user");
    Ok(())
}
