pub mod customer_import;
pub mod customer_lookup;
pub mod plan;
pub mod plan_role;
pub mod registration;
pub mod session;
