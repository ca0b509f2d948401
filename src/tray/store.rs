//! Persistence seams used by the token manager and the customer import.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::tray::TrayError;
use crate::model::customer::{LocalAddress, LocalCustomer};
use crate::tray::credential::Credential;

/// Where the Tray credential survives restarts.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored credential, or `None` when the store was never authenticated.
    async fn load_credential(&self) -> Result<Option<Credential>, TrayError>;

    /// Replaces the stored credential.
    async fn save_credential(&self, credential: &Credential) -> Result<(), TrayError>;

    /// Records when the last customer import finished.
    async fn record_last_sync(&self, at: DateTime<Utc>) -> Result<(), TrayError>;
}

/// Local storage for imported customers.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Inserts or replaces a customer by id.
    ///
    /// Fails with `MissingRequiredField` when the id is empty.
    async fn upsert_customer(&self, customer: &LocalCustomer) -> Result<(), TrayError>;

    /// Inserts or replaces an address by id.
    ///
    /// Fails with `MissingRequiredField` when the id or customer id is empty and
    /// with `CustomerNotFound` when the owning customer is not stored.
    async fn upsert_address(&self, address: &LocalAddress) -> Result<(), TrayError>;

    async fn plan_exists(&self, plan_id: &str) -> Result<bool, TrayError>;

    /// Creates the default plans that are missing.
    async fn ensure_default_plans(&self) -> Result<(), TrayError>;
}
