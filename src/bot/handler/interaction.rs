use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::bot::{command, handler::Handler};
use crate::error::{registration::RegistrationError, AppError};

/// Runs a slash command and replies to the member who used it.
///
/// Every reply is ephemeral. Commands that may outlast Discord's response window
/// are deferred first and answered with an edit.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Command /{} from user {} in guild {:?}",
        command.data.name,
        command.user.id,
        command.guild_id
    );

    let deferred = command::is_long_running(&command.data.name);
    if deferred {
        if let Err(e) = command.defer_ephemeral(&ctx.http).await {
            tracing::error!("Failed to defer /{}: {:?}", command.data.name, e);
            return;
        }
    }

    let reply = match command::run(handler, &ctx, &command).await {
        Ok(reply) => reply,
        Err(e) => {
            log_command_error(&command, &e);
            e.user_message()
        }
    };

    let sent = if deferred {
        command
            .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
            .await
            .map(|_| ())
    } else {
        command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(reply)
                        .ephemeral(true),
                ),
            )
            .await
    };

    if let Err(e) = sent {
        tracing::error!("Failed to reply to /{}: {:?}", command.data.name, e);
    }
}

fn log_command_error(command: &CommandInteraction, err: &AppError) {
    match err {
        AppError::RegistrationErr(RegistrationError::Database(_) | RegistrationError::Tray(_)) => {
            tracing::error!(
                "/{} by user {} failed: {}",
                command.data.name,
                command.user.id,
                err
            )
        }
        AppError::BadRequest(_) | AppError::NotFound(_) | AppError::RegistrationErr(_) => {
            tracing::info!(
                "/{} by user {} rejected: {}",
                command.data.name,
                command.user.id,
                err
            )
        }
        _ => tracing::error!(
            "/{} by user {} failed: {}",
            command.data.name,
            command.user.id,
            err
        ),
    }
}
