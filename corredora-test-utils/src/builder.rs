//! Declarative test builder.
//!
//! Configures the tables a test needs before execution; all table creation
//! runs against a fresh in-memory SQLite database during `build()`.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization. Chain the tables the test
/// needs and finalize with `build()`.
///
/// ```ignore
/// let test = TestBuilder::new().with_crm_tables().build().await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add all three CRM tables: clientes, seguros, ex_seguros.
    pub fn with_crm_tables(self) -> Self {
        self.with_table(entity::prelude::Cliente)
            .with_table(entity::prelude::Seguro)
            .with_table(entity::prelude::ExSeguro)
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to a fresh in-memory SQLite database and create the
    /// configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in &self.tables {
            db.execute(stmt).await?;
        }

        Ok(TestContext { db })
    }
}
