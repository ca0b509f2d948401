use crate::{data::customer_address::CustomerAddressRepository, model::customer::LocalAddress};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_customer_id;
mod upsert;
