//! Error types for the Uganda Directory client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the SMS broadcast backend.
#[derive(Error, Debug)]
pub enum SmsApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Backend returned a non-success status code
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    ApiError {
        status: u16,
        /// Optional `message` field parsed from the error body
        message: Option<String>,
    },

    /// Failed to parse a JSON response body
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl SmsApiError {
    /// The server-provided error message, when the backend supplied one.
    ///
    /// Transport failures and message-less rejections return `None`; callers
    /// substitute their own fallback text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SmsApiError::ApiError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when building or querying the district catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No region with the given name exists
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    /// No district with the given name exists in the region
    #[error("District not found: {district} (region {region})")]
    DistrictNotFound { region: String, district: String },

    /// Region name appears more than once in the catalog
    #[error("Duplicate region name: {0}")]
    DuplicateRegion(String),

    /// District name appears more than once within a region
    #[error("Duplicate district name: {district} (region {region})")]
    DuplicateDistrict { region: String, district: String },

    /// Failed to read a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SmsApiError
pub type SmsApiResult<T> = Result<T, SmsApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
