//! Configuration management for the Uganda Directory client.
//!
//! This module handles loading and validating configuration from environment
//! variables, with optional `.env` support via `dotenvy`.
//!
//! The two backend endpoints are deliberately independent configuration
//! values: the add-number call is addressed relative to a base URL, while the
//! broadcast call uses a full endpoint address.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the Uganda Directory client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address for the add-number endpoint family; the client appends
    /// `/districts/{district}/phone-numbers`
    pub add_number_api_url: String,

    /// Full address of the broadcast endpoint
    pub broadcast_api_url: String,

    /// HTTP request timeout in seconds (default: 10); no automatic retries
    pub request_timeout: u64,

    /// Seconds before a success notification auto-dismisses (default: 3)
    pub notification_ttl_secs: u64,

    /// Optional path to a JSON catalog file; the built-in Uganda catalog is
    /// used when unset
    pub catalog_path: Option<String>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ADD_NUMBER_API_URL`: base URL for the add-number endpoint family
    /// - `BROADCAST_API_URL`: full URL of the broadcast endpoint
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `NOTIFICATION_TTL_SECS`: success auto-dismiss delay (default: 3)
    /// - `CATALOG_PATH`: JSON catalog file (default: built-in data)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; absence is not an error
        let _ = dotenvy::dotenv();

        let add_number_api_url = env::var("ADD_NUMBER_API_URL")
            .map_err(|_| ConfigError::MissingVar("ADD_NUMBER_API_URL".to_string()))?;
        let broadcast_api_url = env::var("BROADCAST_API_URL")
            .map_err(|_| ConfigError::MissingVar("BROADCAST_API_URL".to_string()))?;

        Self::validate_url("ADD_NUMBER_API_URL", &add_number_api_url)?;
        Self::validate_url("BROADCAST_API_URL", &broadcast_api_url)?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let notification_ttl_secs = Self::parse_env_u64("NOTIFICATION_TTL_SECS", 3)?;
        let catalog_path = env::var("CATALOG_PATH").ok();
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            add_number_api_url,
            broadcast_api_url,
            request_timeout,
            notification_ttl_secs,
            catalog_path,
            log_level,
        })
    }

    fn validate_url(var: &str, value: &str) -> ConfigResult<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            add_number_api_url: String::new(),
            broadcast_api_url: String::new(),
            request_timeout: 10,
            notification_ttl_secs: 3,
            catalog_path: None,
            log_level: "error".to_string(),
        }
    }
}
