//! Membership plans and the Discord roles they grant.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_discord_id;

/// Plan assigned to customers imported from Tray.
pub const DEFAULT_PLAN_ID: &str = "basic";

/// A plan seeded on first run.
pub struct DefaultPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Plans every installation starts with. Their Discord roles are configured
/// later with the `config-plan` command.
pub const DEFAULT_PLANS: [DefaultPlan; 3] = [
    DefaultPlan {
        id: DEFAULT_PLAN_ID,
        name: "Plano Básico",
        description: "Acesso básico aos conteúdos",
    },
    DefaultPlan {
        id: "premium",
        name: "Plano Premium",
        description: "Acesso a todos os conteúdos premium",
    },
    DefaultPlan {
        id: "vip",
        name: "Plano VIP",
        description: "Acesso VIP com benefícios exclusivos",
    },
];

/// Membership plan with the Discord role it grants.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Role granted to linked members on this plan, if configured.
    pub discord_role_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Converts an entity model to a plan at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Plan)` - Converted plan
    /// - `Err(DbErr::Custom)` - The stored role id is not a valid u64
    pub fn from_entity(entity: entity::plan::Model) -> Result<Self, DbErr> {
        let discord_role_id = entity
            .discord_role_id
            .as_deref()
            .map(parse_discord_id)
            .transpose()?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            discord_role_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a plan.
#[derive(Debug, Clone)]
pub struct CreatePlanParam {
    pub name: String,
    pub description: Option<String>,
    pub discord_role_id: Option<u64>,
}

impl CreatePlanParam {
    /// Id the plan will be stored under, derived from its name.
    pub fn plan_id(&self) -> String {
        plan_slug(&self.name)
    }
}

/// Lowercases a plan name and joins its words with `-`.
pub fn plan_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
