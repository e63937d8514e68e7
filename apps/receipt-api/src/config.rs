//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. With nothing set, the server listens on `127.0.0.1:8080`.
//! Only the listen address is configurable; request handling is fixed.

use std::env;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind (`RECEIPTS_BIND_ADDR`)
    pub bind_addr: String,

    /// Port to listen on, 0 for any free port (`RECEIPTS_PORT`)
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let bind_addr = lookup("RECEIPTS_BIND_ADDR").unwrap_or(defaults.bind_addr);
        if bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("RECEIPTS_BIND_ADDR".to_string()));
        }

        let port = match lookup("RECEIPTS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPTS_PORT".to_string()))?,
            None => defaults.port,
        };

        Ok(ApiConfig { bind_addr, port })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
