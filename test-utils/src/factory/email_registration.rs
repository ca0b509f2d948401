//! Email registration factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating Discord email registrations.
pub struct EmailRegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    discord_user_id: String,
    user_tag: String,
    guild_id: Option<String>,
}

impl<'a> EmailRegistrationFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - email: `"member{n}@example.com"`
    /// - discord_user_id: `"{100000 + n}"`
    /// - user_tag: `"member{n}"`
    /// - guild_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("member{}@example.com", id),
            discord_user_id: (100_000 + id).to_string(),
            user_tag: format!("member{}", id),
            guild_id: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn discord_user_id(mut self, discord_user_id: impl Into<String>) -> Self {
        self.discord_user_id = discord_user_id.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Builds and inserts the registration.
    pub async fn build(self) -> Result<entity::email_registration::Model, DbErr> {
        let now = Utc::now();
        entity::email_registration::ActiveModel {
            email: ActiveValue::Set(self.email),
            discord_user_id: ActiveValue::Set(self.discord_user_id),
            user_tag: ActiveValue::Set(self.user_tag),
            guild_id: ActiveValue::Set(self.guild_id),
            registered_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registration with default values.
pub async fn create_registration(
    db: &DatabaseConnection,
) -> Result<entity::email_registration::Model, DbErr> {
    EmailRegistrationFactory::new(db).build().await
}
