//! SeaORM-backed implementation of the Tray persistence seams.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::data::{
    customer::CustomerRepository, customer_address::CustomerAddressRepository,
    plan::PlanRepository, tray_config::TrayConfigRepository,
};
use crate::error::tray::TrayError;
use crate::model::customer::{LocalAddress, LocalCustomer};
use crate::tray::credential::Credential;
use crate::tray::store::{CredentialStore, CustomerStore};

/// Credential and customer storage in the application database.
#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for DatabaseStore {
    async fn load_credential(&self) -> Result<Option<Credential>, TrayError> {
        Ok(TrayConfigRepository::new(&self.db).load().await?)
    }

    async fn save_credential(&self, credential: &Credential) -> Result<(), TrayError> {
        Ok(TrayConfigRepository::new(&self.db).save(credential).await?)
    }

    async fn record_last_sync(&self, at: DateTime<Utc>) -> Result<(), TrayError> {
        if !TrayConfigRepository::new(&self.db)
            .record_last_sync(at)
            .await?
        {
            tracing::warn!("No Tray credential row to record the last sync on");
        }

        Ok(())
    }
}

#[async_trait]
impl CustomerStore for DatabaseStore {
    async fn upsert_customer(&self, customer: &LocalCustomer) -> Result<(), TrayError> {
        if customer.id.trim().is_empty() {
            return Err(TrayError::MissingRequiredField("customer id".to_string()));
        }

        CustomerRepository::new(&self.db).upsert(customer).await?;

        Ok(())
    }

    async fn upsert_address(&self, address: &LocalAddress) -> Result<(), TrayError> {
        if address.id.trim().is_empty() {
            return Err(TrayError::MissingRequiredField("address id".to_string()));
        }
        if address.customer_id.trim().is_empty() {
            return Err(TrayError::MissingRequiredField(
                "address customer id".to_string(),
            ));
        }
        if !CustomerRepository::new(&self.db)
            .exists(&address.customer_id)
            .await?
        {
            return Err(TrayError::CustomerNotFound(address.customer_id.clone()));
        }

        CustomerAddressRepository::new(&self.db)
            .upsert(address)
            .await?;

        Ok(())
    }

    async fn plan_exists(&self, plan_id: &str) -> Result<bool, TrayError> {
        Ok(PlanRepository::new(&self.db).exists(plan_id).await?)
    }

    async fn ensure_default_plans(&self) -> Result<(), TrayError> {
        let created = PlanRepository::new(&self.db).ensure_defaults().await?;
        if created > 0 {
            tracing::info!("Created {} default plans", created);
        }

        Ok(())
    }
}
