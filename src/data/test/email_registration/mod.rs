use crate::{
    data::email_registration::EmailRegistrationRepository,
    model::registration::RegisterEmailParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_user_id;
mod find_by_user_id;
mod register;

fn param(email: &str, discord_user_id: u64) -> RegisterEmailParam {
    RegisterEmailParam {
        email: email.to_string(),
        discord_user_id,
        user_tag: format!("member{}", discord_user_id),
        guild_id: Some(777),
    }
}
