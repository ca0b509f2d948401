//! Customer address factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an address for the given customer with placeholder values.
///
/// # Arguments
/// - `db` - Database connection
/// - `customer_id` - Owning customer, which must already exist
///
/// # Returns
/// - `Ok(entity::customer_address::Model)` - Created address
/// - `Err(DbErr)` - Database error during insert
pub async fn create_address(
    db: &DatabaseConnection,
    customer_id: &str,
) -> Result<entity::customer_address::Model, DbErr> {
    let id = next_id();
    entity::customer_address::ActiveModel {
        id: ActiveValue::Set(format!("addr-{}", id)),
        customer_id: ActiveValue::Set(customer_id.to_string()),
        address: ActiveValue::Set(format!("Rua {}", id)),
        number: ActiveValue::Set(id.to_string()),
        complement: ActiveValue::Set(String::new()),
        district: ActiveValue::Set("Centro".to_string()),
        city: ActiveValue::Set("São Paulo".to_string()),
        state: ActiveValue::Set("SP".to_string()),
        zip_code: ActiveValue::Set("01000-000".to_string()),
    }
    .insert(db)
    .await
}
