use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::tray::client::TrayClient;

/// Connects the bot to Discord and processes events until shutdown.
///
/// # Arguments
/// - `config`: Application configuration, must hold the bot token
/// - `db`: Database connection shared with command handlers
/// - `tray`: Tray client for on-demand customer lookups and imports, if configured
///
/// # Returns
/// - `Ok(())`: The gateway connection closed
/// - `Err(AppError::ConfigErr)`: No bot token configured
/// - `Err(AppError::DiscordErr)`: Failed to build the client or connect
pub async fn start_bot(
    config: &Config,
    db: DatabaseConnection,
    tray: Option<TrayClient>,
) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, tray, config.tray.page_size);

    let mut client = Client::builder(config.require_bot_token()?, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
