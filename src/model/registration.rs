//! Discord email registrations and user-to-customer links.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_discord_id;

/// An email a Discord user registered with the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailRegistration {
    pub email: String,
    pub discord_user_id: u64,
    pub user_tag: String,
    pub guild_id: Option<u64>,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmailRegistration {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(EmailRegistration)` - Converted registration
    /// - `Err(DbErr::Custom)` - A stored Discord id is not a valid u64
    pub fn from_entity(entity: entity::email_registration::Model) -> Result<Self, DbErr> {
        Ok(Self {
            discord_user_id: parse_discord_id(&entity.discord_user_id)?,
            guild_id: entity
                .guild_id
                .as_deref()
                .map(parse_discord_id)
                .transpose()?,
            email: entity.email,
            user_tag: entity.user_tag,
            registered_at: entity.registered_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for registering an email.
#[derive(Debug, Clone)]
pub struct RegisterEmailParam {
    /// Normalized email address.
    pub email: String,
    pub discord_user_id: u64,
    pub user_tag: String,
    pub guild_id: Option<u64>,
}

/// Link between a Discord user and a Tray customer.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLink {
    pub discord_user_id: u64,
    pub customer_id: String,
    pub linked_at: DateTime<Utc>,
}

impl UserLink {
    pub fn from_entity(entity: entity::user_link::Model) -> Result<Self, DbErr> {
        Ok(Self {
            discord_user_id: parse_discord_id(&entity.discord_user_id)?,
            customer_id: entity.customer_id,
            linked_at: entity.linked_at,
        })
    }
}

/// Outcome of linking every registered email to a matching customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoLinkSummary {
    pub total_emails: usize,
    pub linked: usize,
    /// Registrations with no matching customer or whose link could not be stored.
    pub failed: usize,
}
