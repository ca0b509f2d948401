//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a plan with a Discord role, a customer on that plan and a
/// registration for the customer's email.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_user_id` - Discord user owning the registration
///
/// # Returns
/// - `Ok((plan, customer, registration))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registered_customer(
    db: &DatabaseConnection,
    discord_user_id: &str,
) -> Result<
    (
        entity::plan::Model,
        entity::customer::Model,
        entity::email_registration::Model,
    ),
    DbErr,
> {
    let plan = crate::factory::plan::create_plan(db).await?;
    let customer = crate::factory::customer::create_customer_with_plan(db, &plan.id).await?;
    let email = customer.email.clone().unwrap_or_default();
    let registration = crate::factory::email_registration::EmailRegistrationFactory::new(db)
        .email(email)
        .discord_user_id(discord_user_id)
        .build()
        .await?;

    Ok((plan, customer, registration))
}
