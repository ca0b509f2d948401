use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::tray::client::TrayClient;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Absent when no Tray credential group is configured; lookups then only
    /// search local customers.
    pub tray: Option<TrayClient>,
    pub page_size: u32,
}

impl Handler {
    pub fn new(db: DatabaseConnection, tray: Option<TrayClient>, page_size: u32) -> Self {
        Self {
            db,
            tray,
            page_size,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for slash commands and other interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
