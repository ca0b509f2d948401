//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for
//! customization and a `create_*` convenience function for quick default
//! creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let plan = factory::plan::PlanFactory::new(&db)
//!     .id("premium")
//!     .discord_role_id("1234")
//!     .build()
//!     .await?;
//! let customer = factory::create_customer_with_plan(&db, &plan.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `plan` - Membership plans
//! - `customer` - Locally cached Tray customers
//! - `customer_address` - Addresses belonging to a customer
//! - `email_registration` - Discord email registrations
//! - `user_link` - Discord user to customer links
//! - `tray_config` - The persisted Tray credential row

pub mod customer;
pub mod customer_address;
pub mod email_registration;
pub mod helpers;
pub mod plan;
pub mod tray_config;
pub mod user_link;

pub use customer::{create_customer, create_customer_with_plan};
pub use customer_address::create_address;
pub use email_registration::create_registration;
pub use plan::create_plan;
pub use tray_config::create_tray_config;
pub use user_link::create_user_link;
