//! Storelink Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the storelink
//! crate. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for seeding rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Plan;
//!
//! #[tokio::test]
//! async fn plan_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Plan).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
