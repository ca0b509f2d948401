use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::bot::command::string_option;
use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::model::customer::CustomerWithPlan;
use crate::model::registration::RegisterEmailParam;
use crate::service::{plan_role::PlanRoleService, registration::RegistrationService};

pub const NAME: &str = "register";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Register the email you purchased with to receive your plan role")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "email", "Your purchase email")
                .required(true),
        )
}

pub async fn run(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let email = string_option(command, "email")?;

    let linked = RegistrationService::new(&handler.db, handler.tray.as_ref())
        .register(RegisterEmailParam {
            email,
            discord_user_id: command.user.id.get(),
            user_tag: command.user.tag(),
            guild_id: command.guild_id.map(|id| id.get()),
        })
        .await?;

    let mut reply = registered_reply(&linked);

    if let (Some(guild_id), Some(member)) = (command.guild_id, command.member.as_deref()) {
        match PlanRoleService::new(&handler.db, &ctx.http)
            .apply(guild_id, command.user.id, &member.roles, linked.plan.as_ref())
            .await
        {
            Ok(changes) if changes.add.is_some() => {
                reply.push_str("\nYour plan role has been granted.");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to apply plan role for user {}: {}",
                    command.user.id,
                    e
                );
                reply.push_str("\nYour plan role could not be granted, please contact an administrator.");
            }
        }
    }

    Ok(reply)
}

fn registered_reply(linked: &CustomerWithPlan) -> String {
    let email = linked.customer.email.as_deref().unwrap_or_default();
    match &linked.plan {
        Some(plan) => format!(
            "Email {} registered for {}. Plan: {}",
            email, linked.customer.name, plan.name
        ),
        None => format!(
            "Email {} registered for {}. No plan is assigned yet.",
            email, linked.customer.name
        ),
    }
}
