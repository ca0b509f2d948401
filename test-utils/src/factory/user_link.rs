//! User link factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a Discord user to a customer.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_user_id` - Discord user id as string
/// - `customer_id` - Tray customer id
///
/// # Returns
/// - `Ok(entity::user_link::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert, including a duplicate user
pub async fn create_user_link(
    db: &DatabaseConnection,
    discord_user_id: &str,
    customer_id: &str,
) -> Result<entity::user_link::Model, DbErr> {
    entity::user_link::ActiveModel {
        discord_user_id: ActiveValue::Set(discord_user_id.to_string()),
        customer_id: ActiveValue::Set(customer_id.to_string()),
        linked_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
