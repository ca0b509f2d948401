//! Tray credential row factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Stores a credential row whose access token expires after `access_valid_for`.
///
/// Pass a negative duration to seed an already expired access token. The
/// refresh token always stays valid for thirty days.
///
/// # Arguments
/// - `db` - Database connection
/// - `api_host` - Base URL requests are sent to
/// - `access_valid_for` - Offset from now for the access token expiration
///
/// # Returns
/// - `Ok(entity::tray_config::Model)` - Created credential row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tray_config(
    db: &DatabaseConnection,
    api_host: &str,
    access_valid_for: Duration,
) -> Result<entity::tray_config::Model, DbErr> {
    let now = Utc::now();
    entity::tray_config::ActiveModel {
        id: ActiveValue::Set(1),
        api_address: ActiveValue::Set(api_host.to_string()),
        access_token: ActiveValue::Set("stored-access".to_string()),
        refresh_token: ActiveValue::Set("stored-refresh".to_string()),
        api_host: ActiveValue::Set(api_host.to_string()),
        access_expires_at: ActiveValue::Set(now + access_valid_for),
        refresh_expires_at: ActiveValue::Set(now + Duration::days(30)),
        store_id: ActiveValue::Set(Some("1".to_string())),
        last_sync_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
