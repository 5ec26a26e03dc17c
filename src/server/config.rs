use rust_decimal::Decimal;

use crate::server::error::config::ConfigError;

/// Fallback UYU→USD exchange rate used when no rate is configured. The
/// brokerage has always normalized against a fixed rate rather than a live
/// quote.
pub const DEFAULT_EXCHANGE_RATE_UYU_USD: &str = "40.5";

pub struct Config {
    pub database_url: String,
    pub listen_address: String,
    /// Pesos per US dollar, used by the statistics aggregator
    pub exchange_rate_uyu_usd: Decimal,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let listen_address =
            std::env::var("LISTEN_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let rate = std::env::var("EXCHANGE_RATE_UYU_USD")
            .unwrap_or_else(|_| DEFAULT_EXCHANGE_RATE_UYU_USD.to_string());
        let exchange_rate_uyu_usd =
            rate.parse::<Decimal>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "EXCHANGE_RATE_UYU_USD".to_string(),
                    reason: e.to_string(),
                })?;

        if exchange_rate_uyu_usd <= Decimal::ZERO {
            return Err(ConfigError::InvalidEnvValue {
                var: "EXCHANGE_RATE_UYU_USD".to_string(),
                reason: "exchange rate must be positive".to_string(),
            });
        }

        Ok(Self {
            database_url,
            listen_address,
            exchange_rate_uyu_usd,
        })
    }
}

fn require_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
