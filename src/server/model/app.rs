use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Fixed UYU→USD rate for premium normalization
    pub exchange_rate_uyu_usd: Decimal,
}

impl From<(DatabaseConnection, Decimal)> for AppState {
    fn from((db, exchange_rate_uyu_usd): (DatabaseConnection, Decimal)) -> Self {
        Self {
            db,
            exchange_rate_uyu_usd,
        }
    }
}
