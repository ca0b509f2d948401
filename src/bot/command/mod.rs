//! Slash command definitions and their handlers.
//!
//! Each command module exposes `definition()` returning the command registered
//! with Discord and `run()` returning the reply text.

use serenity::all::{CommandInteraction, Context, CreateCommand, ResolvedValue};

use crate::bot::handler::Handler;
use crate::error::AppError;

pub mod auto_link;
pub mod config_plan;
pub mod my_email;
pub mod register;
pub mod sync_customers;
pub mod unlink;

/// Every command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        register::definition(),
        my_email::definition(),
        unlink::definition(),
        config_plan::definition(),
        sync_customers::definition(),
        auto_link::definition(),
    ]
}

/// Commands that call Tray or walk every registration, answered after a deferral.
pub fn is_long_running(name: &str) -> bool {
    matches!(
        name,
        register::NAME | sync_customers::NAME | auto_link::NAME
    )
}

/// Dispatches a command to its handler.
///
/// # Returns
/// - `Ok(String)`: Reply for the member
/// - `Err(AppError::BadRequest)`: Unknown command, missing option or missing permission
/// - `Err(AppError)`: The command itself failed
pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    match command.data.name.as_str() {
        register::NAME => register::run(handler, ctx, command).await,
        my_email::NAME => my_email::run(handler, command).await,
        unlink::NAME => unlink::run(handler, ctx, command).await,
        config_plan::NAME => config_plan::run(handler, command).await,
        sync_customers::NAME => sync_customers::run(handler, command).await,
        auto_link::NAME => auto_link::run(handler, command).await,
        other => Err(AppError::BadRequest(format!("Unknown command /{}", other))),
    }
}

/// Reads a required string option.
fn string_option(command: &CommandInteraction, name: &str) -> Result<String, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'", name)))
}

/// Reads a required role option.
fn role_option(command: &CommandInteraction, name: &str) -> Result<u64, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::Role(role) if option.name == name => Some(role.id.get()),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'", name)))
}

/// Rejects members without the Administrator permission.
fn require_admin(command: &CommandInteraction) -> Result<(), AppError> {
    let is_admin = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());

    if !is_admin {
        return Err(AppError::BadRequest(
            "Only administrators can use this command".to_string(),
        ));
    }

    Ok(())
}
