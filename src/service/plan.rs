use sea_orm::DatabaseConnection;

use crate::{
    data::plan::PlanRepository,
    error::AppError,
    model::plan::Plan,
};

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the Discord role granted by a plan.
    ///
    /// # Arguments
    /// - `plan_id`: Id of the plan to configure
    /// - `role_id`: Role granted to members on that plan
    ///
    /// # Returns
    /// - `Ok(Plan)`: Updated plan
    /// - `Err(AppError::NotFound)`: No plan with that id
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn configure_role(&self, plan_id: &str, role_id: u64) -> Result<Plan, AppError> {
        let plan_id = plan_id.trim().to_lowercase();

        let plan = PlanRepository::new(self.db)
            .update_role(&plan_id, Some(role_id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan '{}' not found", plan_id)))?;

        tracing::info!("Plan {} now grants role {}", plan.id, role_id);

        Ok(plan)
    }

    pub async fn list(&self) -> Result<Vec<Plan>, AppError> {
        Ok(PlanRepository::new(self.db).get_all().await?)
    }
}
