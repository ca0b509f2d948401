//! Database repository layer.
//!
//! Repositories hold a `&DatabaseConnection`, use SeaORM entity models internally
//! and return domain models from `crate::model`. `DatabaseStore` adapts them to the
//! store traits the Tray integration is written against.

pub mod customer;
pub mod customer_address;
pub mod email_registration;
pub mod plan;
pub mod store;
pub mod tray_config;
pub mod user_link;

#[cfg(test)]
mod test;
