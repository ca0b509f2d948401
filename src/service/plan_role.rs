//! Keeps a member's Discord roles in line with their plan.

use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Http, RoleId, UserId};

use crate::{data::plan::PlanRepository, error::AppError, model::plan::Plan};

const AUDIT_REASON: &str = "Plan role sync";

/// Role edits needed to move a member onto a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRoleChanges {
    pub remove: Vec<u64>,
    pub add: Option<u64>,
}

impl PlanRoleChanges {
    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_none()
    }
}

/// Computes the role edits that leave a member with only the target plan's role.
///
/// Every plan role the member holds other than the target's is removed. The target
/// role is added when the member does not hold it yet. Roles that belong to no plan
/// are never touched.
///
/// # Arguments
/// - `plans` - All plans, with or without roles
/// - `member_roles` - Roles the member currently holds
/// - `target` - Plan the member should be on, `None` to strip every plan role
pub fn plan_role_changes(
    plans: &[Plan],
    member_roles: &[u64],
    target: Option<&Plan>,
) -> PlanRoleChanges {
    let target_role = target.and_then(|plan| plan.discord_role_id);

    let mut remove: Vec<u64> = plans
        .iter()
        .filter_map(|plan| plan.discord_role_id)
        .filter(|role| Some(*role) != target_role && member_roles.contains(role))
        .collect();
    remove.sort_unstable();
    remove.dedup();

    let add = target_role.filter(|role| !member_roles.contains(role));

    PlanRoleChanges { remove, add }
}

pub struct PlanRoleService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
}

impl<'a> PlanRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http) -> Self {
        Self { db, http }
    }

    /// Applies the plan role edits for one guild member.
    ///
    /// Removal failures are logged and the remaining edits still run. A failure to
    /// add the target role is returned.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the member belongs to
    /// - `user_id`: Discord user to update
    /// - `member_roles`: Roles the member currently holds
    /// - `target`: Plan the member should be on, `None` to strip every plan role
    ///
    /// # Returns
    /// - `Ok(PlanRoleChanges)`: The edits that were attempted
    /// - `Err(AppError::DbErr)`: Plans could not be loaded
    /// - `Err(AppError::DiscordErr)`: The target role could not be added
    pub async fn apply(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        member_roles: &[RoleId],
        target: Option<&Plan>,
    ) -> Result<PlanRoleChanges, AppError> {
        let plans = PlanRepository::new(self.db).get_all().await?;
        let held: Vec<u64> = member_roles.iter().map(|role| role.get()).collect();
        let changes = plan_role_changes(&plans, &held, target);

        for role in &changes.remove {
            if let Err(e) = self
                .http
                .remove_member_role(guild_id, user_id, RoleId::new(*role), Some(AUDIT_REASON))
                .await
            {
                tracing::warn!(
                    "Failed to remove plan role {} from user {} in guild {}: {}",
                    role,
                    user_id,
                    guild_id,
                    e
                );
            }
        }

        if let Some(role) = changes.add {
            self.http
                .add_member_role(guild_id, user_id, RoleId::new(role), Some(AUDIT_REASON))
                .await?;
            tracing::info!(
                "Granted plan role {} to user {} in guild {}",
                role,
                user_id,
                guild_id
            );
        }

        Ok(changes)
    }
}
