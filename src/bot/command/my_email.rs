use serenity::all::{CommandInteraction, CreateCommand};

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::service::registration::{MemberRegistration, RegistrationService};

pub const NAME: &str = "my-email";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the email you registered and your plan")
}

pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<String, AppError> {
    let member = RegistrationService::new(&handler.db, None)
        .member_registration(command.user.id.get())
        .await?;

    Ok(member_reply(&member))
}

fn member_reply(member: &MemberRegistration) -> String {
    let mut reply = format!(
        "Registered email: {}\nRegistered at: {}",
        member.registration.email,
        member.registration.registered_at.format("%Y-%m-%d %H:%M UTC")
    );

    match &member.customer {
        Some(linked) => {
            reply.push_str(&format!("\nCustomer: {}", linked.customer.name));
            match &linked.plan {
                Some(plan) => reply.push_str(&format!("\nPlan: {}", plan.name)),
                None => reply.push_str("\nPlan: none"),
            }
        }
        None => reply.push_str("\nNo customer is linked to this email yet."),
    }

    reply
}
