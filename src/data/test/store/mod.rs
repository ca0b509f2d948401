use crate::{
    data::{customer_address::CustomerAddressRepository, store::DatabaseStore},
    error::tray::TrayError,
    model::customer::{LocalAddress, LocalCustomer},
    tray::store::CustomerStore,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert_address;
mod upsert_customer;
