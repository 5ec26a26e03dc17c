use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Test environment returned by [`crate::TestBuilder::build`]: an in-memory
/// SQLite database with the configured tables created.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection plus an exchange rate into any state
    /// type constructible from them. Avoids a circular dependency between
    /// this crate and the server crate's `AppState`.
    pub fn to_app_state<T>(&self, exchange_rate: Decimal) -> T
    where
        T: From<(DatabaseConnection, Decimal)>,
    {
        T::from((self.db.clone(), exchange_rate))
    }
}
