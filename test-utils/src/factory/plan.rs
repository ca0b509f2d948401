//! Plan factory for creating test plan entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plans with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanFactory::new(&db)
///     .id("vip")
///     .name("VIP")
///     .discord_role_id("1234567890123458")
///     .build()
///     .await?;
/// ```
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    description: Option<String>,
    discord_role_id: Option<String>,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory with default values.
    ///
    /// Defaults:
    /// - id: `"plan-{n}"`
    /// - name: `"Plan {n}"`
    /// - description: `None`
    /// - discord_role_id: `"{900000 + n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("plan-{}", id),
            name: format!("Plan {}", id),
            description: None,
            discord_role_id: Some((900_000 + id).to_string()),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn discord_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.discord_role_id = Some(role_id.into());
        self
    }

    /// Leaves the plan without a Discord role.
    pub fn without_role(mut self) -> Self {
        self.discord_role_id = None;
        self
    }

    /// Builds and inserts the plan entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::plan::Model)` - Created plan entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        let now = Utc::now();
        entity::plan::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            discord_role_id: ActiveValue::Set(self.discord_role_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plan with default values.
pub async fn create_plan(db: &DatabaseConnection) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db).build().await
}
