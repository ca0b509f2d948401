//! Locally stored projection of Tray customers.

use crate::error::tray::TrayError;
use crate::model::plan::{Plan, DEFAULT_PLAN_ID};
use crate::tray::model::{TrayAddress, TrayCustomer};

/// Customer as stored locally. Upserted by id; the latest import wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalCustomer {
    pub id: String,
    pub name: String,
    pub cpf: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub last_visit: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub newsletter: Option<String>,
    pub plan_id: Option<String>,
    pub created: Option<String>,
    pub registration_date: Option<String>,
    pub modified: Option<String>,
}

impl LocalCustomer {
    /// Maps a Tray customer record to its local projection.
    ///
    /// Imported customers start on the default plan; callers drop the plan when it
    /// does not exist locally.
    ///
    /// # Returns
    /// - `Ok(LocalCustomer)` - Mapped customer
    /// - `Err(TrayError::MissingRequiredField)` - The record has no id
    pub fn from_remote(remote: &TrayCustomer) -> Result<Self, TrayError> {
        let id = remote
            .id
            .clone()
            .ok_or_else(|| TrayError::MissingRequiredField("customer id".to_string()))?;

        Ok(Self {
            id,
            name: remote.name.clone().unwrap_or_default(),
            cpf: remote.cpf.clone(),
            birth_date: remote.birth_date.clone(),
            gender: remote.gender.clone(),
            email: remote.email.clone(),
            cnpj: remote.cnpj.clone(),
            last_visit: remote.last_visit.clone(),
            city: remote.city.clone(),
            state: remote.state.clone(),
            newsletter: remote.newsletter.clone(),
            plan_id: Some(DEFAULT_PLAN_ID.to_string()),
            created: remote.created.clone(),
            registration_date: remote.registration_date.clone(),
            modified: remote.modified.clone(),
        })
    }

    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cpf: entity.cpf,
            birth_date: entity.birth_date,
            gender: entity.gender,
            email: entity.email,
            cnpj: entity.cnpj,
            last_visit: entity.last_visit,
            city: entity.city,
            state: entity.state,
            newsletter: entity.newsletter,
            plan_id: entity.plan_id,
            created: entity.created,
            registration_date: entity.registration_date,
            modified: entity.modified,
        }
    }
}

/// Customer address as stored locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddress {
    pub id: String,
    pub customer_id: String,
    pub address: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl LocalAddress {
    /// Maps a Tray address to its local projection under `customer_id`.
    ///
    /// Tray calls the district `neighborhood`. Missing text fields are stored empty.
    ///
    /// # Returns
    /// - `Ok(LocalAddress)` - Mapped address
    /// - `Err(TrayError::MissingRequiredField)` - The address has no id
    pub fn from_remote(remote: &TrayAddress, customer_id: &str) -> Result<Self, TrayError> {
        let id = remote
            .id
            .clone()
            .ok_or_else(|| TrayError::MissingRequiredField("address id".to_string()))?;
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        Ok(Self {
            id,
            customer_id: customer_id.to_string(),
            address: text(&remote.address),
            number: text(&remote.number),
            complement: text(&remote.complement),
            district: text(&remote.neighborhood),
            city: text(&remote.city),
            state: text(&remote.state),
            zip_code: text(&remote.zip_code),
        })
    }

    pub fn from_entity(entity: entity::customer_address::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            address: entity.address,
            number: entity.number,
            complement: entity.complement,
            district: entity.district,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
        }
    }
}

/// A customer together with its plan, when it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerWithPlan {
    pub customer: LocalCustomer,
    pub plan: Option<Plan>,
}

/// Outcome of a bulk customer import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Customers stored successfully.
    pub total_imported: usize,
    /// Listed customers that could not be fetched, mapped or stored.
    pub skipped: usize,
    /// Pages listed successfully.
    pub pages_fetched: u32,
    /// False when a page listing failed and pagination stopped early.
    pub completed: bool,
}
