use crate::{
    data::plan::PlanRepository,
    model::plan::{CreatePlanParam, DEFAULT_PLANS, DEFAULT_PLAN_ID},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod ensure_defaults;
mod find_by_name;
mod get_all;
mod update_role;
