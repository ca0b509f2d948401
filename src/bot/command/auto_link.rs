use serenity::all::{CommandInteraction, CreateCommand, Permissions};

use crate::bot::command::require_admin;
use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::service::registration::RegistrationService;

pub const NAME: &str = "auto-link";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Link every registered email to the stored customer with that email")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<String, AppError> {
    require_admin(command)?;

    let summary = RegistrationService::new(&handler.db, None)
        .auto_link()
        .await?;

    Ok(format!(
        "Auto link finished: {} of {} registered emails linked, {} without a matching customer.",
        summary.linked, summary.total_emails, summary.failed
    ))
}
