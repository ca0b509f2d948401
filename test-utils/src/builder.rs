use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which storelink tables a test needs.
///
/// Most tests use one of the grouped helpers (`with_customer_tables`,
/// `with_import_tables`, `with_registration_tables`); `with_table` adds a single entity.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Plan)
///     .with_table(Customer)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the plan, customer and customer address tables in dependency order.
    pub fn with_customer_tables(self) -> Self {
        self.with_table(Plan)
            .with_table(Customer)
            .with_table(CustomerAddress)
    }

    /// Adds every table used by the customer import, including the
    /// persisted Tray credential row.
    pub fn with_import_tables(self) -> Self {
        self.with_customer_tables().with_table(TrayConfig)
    }

    /// Adds the email registration and user link tables together with the
    /// customer tables they are matched against.
    pub fn with_registration_tables(self) -> Self {
        self.with_customer_tables()
            .with_table(EmailRegistration)
            .with_table(UserLink)
    }

    /// Opens the in-memory database and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.create_tables(self.tables).await?;

        Ok(context)
    }
}
