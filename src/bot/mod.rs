//! Discord bot exposing the registration and administration slash commands.
//!
//! Members register the email they bought with, the bot links them to the
//! matching Tray customer and grants the Discord role of the customer's plan.
//! Administrators configure plan roles and trigger imports.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Receive guild information needed for interactions
//! - `GUILD_MEMBERS` - Read and edit member roles (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
