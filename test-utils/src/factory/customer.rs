//! Customer factory for creating locally cached Tray customers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// Only the fields the tests care about are configurable. Everything else
/// is left empty.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    email: Option<String>,
    plan_id: Option<String>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - id: `"{n}"`
    /// - name: `"Customer {n}"`
    /// - email: `"customer{n}@example.com"`
    /// - plan_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Customer {}", id),
            email: Some(format!("customer{}@example.com", id)),
            plan_id: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert, including a missing plan
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            cpf: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            cnpj: ActiveValue::Set(None),
            last_visit: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            newsletter: ActiveValue::Set(None),
            plan_id: ActiveValue::Set(self.plan_id),
            created: ActiveValue::Set(None),
            registration_date: ActiveValue::Set(None),
            modified: ActiveValue::Set(None),
            synced_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values and no plan.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}

/// Creates a customer assigned to the given plan.
pub async fn create_customer_with_plan(
    db: &DatabaseConnection,
    plan_id: &str,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).plan_id(plan_id).build().await
}
