//! Tray Commerce API integration.
//!
//! Requests flow importer → `TrayClient` → `TokenManager::ensure_valid()` →
//! `RateLimiter::submit()` → `Transport`. The token manager refreshes and persists
//! the credential when it has expired; the limiter keeps the process under the
//! store's per-minute request quota.

pub mod client;
pub mod credential;
pub mod encode;
pub mod model;
pub mod rate_limiter;
pub mod store;
pub mod token;
pub mod transport;

pub use crate::error::tray::TrayError;
pub use client::TrayClient;
pub use credential::Credential;
pub use rate_limiter::{RateLimitConfig, RateLimiter};
pub use store::{CredentialStore, CustomerStore};
pub use token::{TokenManager, TokenStatus};
pub use transport::{ReqwestTransport, Transport};
