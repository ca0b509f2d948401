use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};

use crate::bot::command::{require_admin, role_option, string_option};
use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::service::plan::PlanService;

pub const NAME: &str = "config-plan";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set the role granted by a plan")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "plan_id", "Plan id, e.g. basic")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Role, "role", "Role granted by the plan")
                .required(true),
        )
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<String, AppError> {
    require_admin(command)?;

    let plan_id = string_option(command, "plan_id")?;
    let role_id = role_option(command, "role")?;

    let service = PlanService::new(&handler.db);
    match service.configure_role(&plan_id, role_id).await {
        Ok(plan) => Ok(format!("Plan {} ({}) now grants <@&{}>.", plan.name, plan.id, role_id)),
        Err(AppError::NotFound(msg)) => {
            let available = service
                .list()
                .await?
                .into_iter()
                .map(|plan| plan.id)
                .collect::<Vec<_>>()
                .join(", ");
            Err(AppError::NotFound(format!(
                "{}. Available plans: {}",
                msg, available
            )))
        }
        Err(e) => Err(e),
    }
}
