//! Configuration module
//!
//! Loads store settings from environment variables.

use std::env;

use crate::aggregate::DEFAULT_CURRENCY;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Currency symbol printed in sales reports
    pub currency_symbol: String,

    /// Environment (development, production)
    pub environment: String,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Load `.env` if present, then read the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let currency_symbol = lookup("STORE_CURRENCY")
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        if currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue("STORE_CURRENCY"));
        }

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let log_filter = lookup("STORE_LOG").unwrap_or_else(|| "keanus_candy=info".to_string());

        Ok(Self {
            currency_symbol,
            environment,
            log_filter,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            environment: "development".to_string(),
            log_filter: "keanus_candy=info".to_string(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
