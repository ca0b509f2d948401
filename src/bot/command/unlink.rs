use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::service::{plan_role::PlanRoleService, registration::RegistrationService};

pub const NAME: &str = "unlink";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME).description("Remove your registered email and plan roles")
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let email = RegistrationService::new(&handler.db, None)
        .unregister(command.user.id.get())
        .await?;

    let mut reply = format!("Email {} is no longer registered to you.", email);

    if let (Some(guild_id), Some(member)) = (command.guild_id, command.member.as_deref()) {
        match PlanRoleService::new(&handler.db, &ctx.http)
            .apply(guild_id, command.user.id, &member.roles, None)
            .await
        {
            Ok(changes) if !changes.remove.is_empty() => {
                reply.push_str("\nYour plan roles were removed.");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to remove plan roles of user {}: {}",
                    command.user.id,
                    e
                );
            }
        }
    }

    Ok(reply)
}
