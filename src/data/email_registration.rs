//! Email registration data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::registration::{EmailRegistration, RegisterEmailParam};
use crate::util::parse::normalize_email;

pub struct EmailRegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailRegistrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an email to a Discord user.
    ///
    /// Registering an email that is already stored moves it to the given user and
    /// keeps its original registration time.
    ///
    /// # Arguments
    /// - `param` - Email, Discord user, user tag and guild
    ///
    /// # Returns
    /// - `Ok(EmailRegistration)` - The stored registration
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn register(&self, param: RegisterEmailParam) -> Result<EmailRegistration, DbErr> {
        use entity::email_registration::Column;

        let now = Utc::now();
        let entity = entity::prelude::EmailRegistration::insert(
            entity::email_registration::ActiveModel {
                email: ActiveValue::Set(normalize_email(&param.email)),
                discord_user_id: ActiveValue::Set(param.discord_user_id.to_string()),
                user_tag: ActiveValue::Set(param.user_tag),
                guild_id: ActiveValue::Set(param.guild_id.map(|id| id.to_string())),
                registered_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(Column::Email)
                .update_columns([
                    Column::DiscordUserId,
                    Column::UserTag,
                    Column::GuildId,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        EmailRegistration::from_entity(entity)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<EmailRegistration>, DbErr> {
        entity::prelude::EmailRegistration::find()
            .filter(entity::email_registration::Column::Email.eq(normalize_email(email)))
            .one(self.db)
            .await?
            .map(EmailRegistration::from_entity)
            .transpose()
    }

    /// Finds the email a Discord user registered, if any.
    pub async fn find_by_user_id(
        &self,
        discord_user_id: u64,
    ) -> Result<Option<EmailRegistration>, DbErr> {
        entity::prelude::EmailRegistration::find()
            .filter(
                entity::email_registration::Column::DiscordUserId.eq(discord_user_id.to_string()),
            )
            .order_by_asc(entity::email_registration::Column::RegisteredAt)
            .one(self.db)
            .await?
            .map(EmailRegistration::from_entity)
            .transpose()
    }

    /// Deletes every email registered by a Discord user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of registrations deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_user_id(&self, discord_user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::EmailRegistration::delete_many()
            .filter(
                entity::email_registration::Column::DiscordUserId.eq(discord_user_id.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_all(&self) -> Result<Vec<EmailRegistration>, DbErr> {
        entity::prelude::EmailRegistration::find()
            .order_by_asc(entity::email_registration::Column::RegisteredAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(EmailRegistration::from_entity)
            .collect()
    }
}
