//! Ready event handler for bot initialization.
//!
//! Registers the global slash commands each time the bot connects. Discord
//! replaces the previous set, so renamed or removed commands disappear.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register the commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
