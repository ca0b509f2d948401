//! Shared fixtures for the Tray integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::{json, Value};
use storelink::model::customer::{LocalAddress, LocalCustomer};
use storelink::tray::{
    Credential, CredentialStore, CustomerStore, RateLimitConfig, RateLimiter, ReqwestTransport,
    TokenManager, TrayClient, TrayError,
};

/// Limiter that never holds a call back, so tests run at network speed.
pub fn unthrottled() -> RateLimitConfig {
    RateLimitConfig {
        requests_per_window: 10_000,
        window: Duration::from_secs(60),
        min_spacing: Duration::ZERO,
    }
}

/// Builds a client against `store`, loading whatever credential it holds.
pub async fn client_with_store(store: Arc<dyn CredentialStore>) -> TrayClient {
    let transport = Arc::new(ReqwestTransport::new(Duration::from_secs(5)).unwrap());
    let limiter = RateLimiter::new(unthrottled());
    let tokens = TokenManager::new(
        transport.clone(),
        store,
        limiter.clone(),
        FixedOffset::west_opt(3 * 3600).unwrap(),
    );
    tokens.load().await.unwrap();

    TrayClient::new(tokens, limiter, transport)
}

pub fn credential(api_host: &str, access_valid_for: chrono::Duration) -> Credential {
    Credential {
        api_address: api_host.to_string(),
        access_token: "stored-access".to_string(),
        refresh_token: "stored-refresh".to_string(),
        api_host: api_host.to_string(),
        access_expires_at: Utc::now() + access_valid_for,
        refresh_expires_at: Utc::now() + chrono::Duration::days(30),
        store_id: Some("1".to_string()),
    }
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    pub credential: Mutex<Option<Credential>>,
    pub last_sync: Mutex<Option<DateTime<Utc>>>,
}

impl MemoryCredentialStore {
    pub fn holding(credential: Credential) -> Arc<Self> {
        Arc::new(Self {
            credential: Mutex::new(Some(credential)),
            last_sync: Mutex::new(None),
        })
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load_credential(&self) -> Result<Option<Credential>, TrayError> {
        Ok(self.credential.lock().unwrap().clone())
    }

    async fn save_credential(&self, credential: &Credential) -> Result<(), TrayError> {
        *self.credential.lock().unwrap() = Some(credential.clone());
        Ok(())
    }

    async fn record_last_sync(&self, at: DateTime<Utc>) -> Result<(), TrayError> {
        *self.last_sync.lock().unwrap() = Some(at);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCustomerStore {
    pub plans: Vec<String>,
    pub customers: Mutex<BTreeMap<String, LocalCustomer>>,
    pub addresses: Mutex<Vec<LocalAddress>>,
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn upsert_customer(&self, customer: &LocalCustomer) -> Result<(), TrayError> {
        self.customers
            .lock()
            .unwrap()
            .insert(customer.id.clone(), customer.clone());
        Ok(())
    }

    async fn upsert_address(&self, address: &LocalAddress) -> Result<(), TrayError> {
        self.addresses.lock().unwrap().push(address.clone());
        Ok(())
    }

    async fn plan_exists(&self, plan_id: &str) -> Result<bool, TrayError> {
        Ok(self.plans.iter().any(|plan| plan == plan_id))
    }

    async fn ensure_default_plans(&self) -> Result<(), TrayError> {
        Ok(())
    }
}

/// `GET /customers` body listing the given ids.
pub fn listing(ids: impl IntoIterator<Item = u32>) -> Value {
    let customers: Vec<Value> = ids
        .into_iter()
        .map(|id| {
            json!({
                "Customer": {
                    "id": id.to_string(),
                    "name": format!("Customer {}", id),
                    "email": format!("customer{}@example.com", id)
                }
            })
        })
        .collect();

    json!({
        "paging": { "total": customers.len(), "page": 1, "limit": 50 },
        "Customers": customers
    })
}

/// `GET /customers/{id}` body with one address.
pub fn detail(id: &str) -> Value {
    json!({
        "Customer": {
            "id": id,
            "name": format!("Customer {}", id),
            "email": format!("customer{}@example.com", id),
            "city": "Curitiba",
            "state": "PR",
            "CustomerAddress": {
                "id": format!("addr-{}", id),
                "customer_id": id,
                "address": "Rua XV de Novembro",
                "number": 100,
                "neighborhood": "Centro",
                "city": "Curitiba",
                "state": "PR",
                "zip_code": "80020-310"
            }
        }
    })
}
