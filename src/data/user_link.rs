//! Discord user to customer link repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::registration::UserLink;

pub struct UserLinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserLinkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a Discord user to a customer, replacing any previous link of that user.
    ///
    /// # Returns
    /// - `Ok(UserLink)` - The stored link
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn link(&self, discord_user_id: u64, customer_id: &str) -> Result<UserLink, DbErr> {
        use entity::user_link::Column;

        let entity = entity::prelude::UserLink::insert(entity::user_link::ActiveModel {
            discord_user_id: ActiveValue::Set(discord_user_id.to_string()),
            customer_id: ActiveValue::Set(customer_id.to_string()),
            linked_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(Column::DiscordUserId)
                .update_columns([Column::CustomerId, Column::LinkedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        UserLink::from_entity(entity)
    }

    pub async fn find_by_user_id(&self, discord_user_id: u64) -> Result<Option<UserLink>, DbErr> {
        entity::prelude::UserLink::find()
            .filter(entity::user_link::Column::DiscordUserId.eq(discord_user_id.to_string()))
            .one(self.db)
            .await?
            .map(UserLink::from_entity)
            .transpose()
    }

    /// Removes a user's link.
    ///
    /// # Returns
    /// - `Ok(true)` - A link was removed
    /// - `Ok(false)` - The user had no link
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unlink(&self, discord_user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::UserLink::delete_many()
            .filter(entity::user_link::Column::DiscordUserId.eq(discord_user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<UserLink>, DbErr> {
        entity::prelude::UserLink::find()
            .order_by_asc(entity::user_link::Column::LinkedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserLink::from_entity)
            .collect()
    }
}
