use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory SQLite database for a single test.
///
/// Repository tests read `db` directly after `TestBuilder::build()`; services that
/// need an owned connection clone it, which keeps the same in-memory database alive.
pub struct TestContext {
    /// Connection opened by the first call to `database()`.
    pub db: Option<DatabaseConnection>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening `sqlite::memory:` on first use.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(sea_orm::DbErr::Custom("no connection".into())))
    }

    /// Runs the CREATE TABLE statements collected by the builder, in order.
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed, usually a table added before
    ///   the table its foreign key references
    pub async fn create_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
