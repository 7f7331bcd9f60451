//! Client configuration.
//!
//! The base URL is resolved once and injected into `ProductApi`, so tests can
//! point the client anywhere without touching the process environment.

use crate::error::ConfigError;

/// Environment variable holding the product collection URL.
pub const BASE_URL_VAR: &str = "INVENTORY_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base_url));
        }
        Ok(Self { base_url })
    }

    /// Read the base URL from `INVENTORY_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(BASE_URL_VAR).map_err(|_| ConfigError::MissingVar(BASE_URL_VAR))?;
        Self::new(value)
    }
}
