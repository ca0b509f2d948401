//! Plan data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::plan::{CreatePlanParam, Plan, DEFAULT_PLANS};

pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the default plans that do not exist yet.
    ///
    /// Existing plans are left untouched, including their configured roles.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of plans created
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn ensure_defaults(&self) -> Result<u64, DbErr> {
        let mut created = 0;

        for default in DEFAULT_PLANS.iter() {
            if self.exists(default.id).await? {
                continue;
            }

            let now = Utc::now();
            entity::plan::ActiveModel {
                id: ActiveValue::Set(default.id.to_string()),
                name: ActiveValue::Set(default.name.to_string()),
                description: ActiveValue::Set(Some(default.description.to_string())),
                discord_role_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?;

            created += 1;
        }

        Ok(created)
    }

    pub async fn exists(&self, plan_id: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Plan::find_by_id(plan_id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    /// Finds a plan by id.
    ///
    /// # Returns
    /// - `Ok(Some(Plan))` - Plan found
    /// - `Ok(None)` - No plan with that id
    /// - `Err(DbErr)` - Database error or unparsable stored role id
    pub async fn find_by_id(&self, plan_id: &str) -> Result<Option<Plan>, DbErr> {
        entity::prelude::Plan::find_by_id(plan_id.to_string())
            .one(self.db)
            .await?
            .map(Plan::from_entity)
            .transpose()
    }

    /// Finds a plan by display name, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Plan>, DbErr> {
        let needle = name.trim().to_lowercase();

        entity::prelude::Plan::find()
            .all(self.db)
            .await?
            .into_iter()
            .find(|plan| plan.name.to_lowercase() == needle)
            .map(Plan::from_entity)
            .transpose()
    }

    /// Gets all plans ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Plan>, DbErr> {
        entity::prelude::Plan::find()
            .order_by_asc(entity::plan::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Plan::from_entity)
            .collect()
    }

    /// Creates a plan whose id is derived from its name.
    ///
    /// # Returns
    /// - `Ok(Plan)` - Created plan
    /// - `Err(DbErr)` - Database error, including a plan with the same id already existing
    pub async fn create(&self, param: CreatePlanParam) -> Result<Plan, DbErr> {
        let now = Utc::now();

        let entity = entity::plan::ActiveModel {
            id: ActiveValue::Set(param.plan_id()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            discord_role_id: ActiveValue::Set(param.discord_role_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Plan::from_entity(entity)
    }

    /// Sets or clears the Discord role a plan grants.
    ///
    /// # Arguments
    /// - `plan_id` - Plan to update
    /// - `role_id` - New role, or `None` to clear it
    ///
    /// # Returns
    /// - `Ok(Some(Plan))` - Updated plan
    /// - `Ok(None)` - No plan with that id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update_role(
        &self,
        plan_id: &str,
        role_id: Option<u64>,
    ) -> Result<Option<Plan>, DbErr> {
        let Some(plan) = entity::prelude::Plan::find_by_id(plan_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::plan::ActiveModel = plan.into();
        active.discord_role_id = ActiveValue::Set(role_id.map(|id| id.to_string()));
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Plan::from_entity(updated)?))
    }
}
