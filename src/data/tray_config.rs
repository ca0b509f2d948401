//! Persistence of the single Tray credential row.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::tray::credential::Credential;

/// The credential always lives in row 1.
const CONFIG_ROW_ID: i32 = 1;

pub struct TrayConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrayConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the stored credential.
    ///
    /// # Returns
    /// - `Ok(Some(Credential))` - A credential has been saved before
    /// - `Ok(None)` - The store was never authenticated
    /// - `Err(DbErr)` - Database error during query
    pub async fn load(&self) -> Result<Option<Credential>, DbErr> {
        Ok(entity::prelude::TrayConfig::find_by_id(CONFIG_ROW_ID)
            .one(self.db)
            .await?
            .map(|row| Credential {
                api_address: row.api_address,
                access_token: row.access_token,
                refresh_token: row.refresh_token,
                api_host: row.api_host,
                access_expires_at: row.access_expires_at,
                refresh_expires_at: row.refresh_expires_at,
                store_id: row.store_id,
            }))
    }

    /// Replaces the stored credential, keeping the last sync timestamp.
    pub async fn save(&self, credential: &Credential) -> Result<(), DbErr> {
        use entity::tray_config::Column;

        entity::prelude::TrayConfig::insert(entity::tray_config::ActiveModel {
            id: ActiveValue::Set(CONFIG_ROW_ID),
            api_address: ActiveValue::Set(credential.api_address.clone()),
            access_token: ActiveValue::Set(credential.access_token.clone()),
            refresh_token: ActiveValue::Set(credential.refresh_token.clone()),
            api_host: ActiveValue::Set(credential.api_host.clone()),
            access_expires_at: ActiveValue::Set(credential.access_expires_at),
            refresh_expires_at: ActiveValue::Set(credential.refresh_expires_at),
            store_id: ActiveValue::Set(credential.store_id.clone()),
            last_sync_at: ActiveValue::NotSet,
        })
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::ApiAddress,
                    Column::AccessToken,
                    Column::RefreshToken,
                    Column::ApiHost,
                    Column::AccessExpiresAt,
                    Column::RefreshExpiresAt,
                    Column::StoreId,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Records when the last customer import finished.
    ///
    /// # Returns
    /// - `Ok(true)` - Timestamp recorded
    /// - `Ok(false)` - No credential row exists to record it on
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_last_sync(&self, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::TrayConfig::update_many()
            .col_expr(entity::tray_config::Column::LastSyncAt, Expr::value(at))
            .filter(entity::tray_config::Column::Id.eq(CONFIG_ROW_ID))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn last_sync(&self) -> Result<Option<DateTime<Utc>>, DbErr> {
        Ok(entity::prelude::TrayConfig::find_by_id(CONFIG_ROW_ID)
            .one(self.db)
            .await?
            .and_then(|row| row.last_sync_at))
    }
}
