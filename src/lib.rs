//! Discord bot linking server members to Tray Commerce customers.
//!
//! Members register the email they purchased with; the bot finds the matching
//! customer, stored locally or fetched from Tray, links the member to it and
//! grants the Discord role of the customer's plan. Customers are imported in bulk
//! on a schedule, on demand, or by the `sync-customers` binary.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod tray;
pub mod util;
