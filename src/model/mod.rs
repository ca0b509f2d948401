//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data layer boundary
//! so services never depend on the `entity` crate directly.

pub mod customer;
pub mod plan;
pub mod registration;
