//! SeaORM entities for the storelink database.

pub mod prelude;

pub mod customer;
pub mod customer_address;
pub mod email_registration;
pub mod plan;
pub mod tray_config;
pub mod user_link;
