//! Uganda Directory - a directory and SMS broadcast client for Uganda's
//! regions and districts.
//!
//! This library provides the core workflow behind the directory application:
//! a static catalog of regions, districts, and seed contacts; validated
//! admission of Uganda mobile numbers; and a serialized submission workflow
//! that drives the two endpoints of an external SMS broadcast backend.
//!
//! # Architecture
//!
//! - **models**: Data structures for regions and districts
//! - **domain**: Validated value objects (Uganda phone numbers)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **catalog**: The immutable directory of regions and districts
//! - **broadcast**: The per-district, session-scoped broadcast list
//! - **client**: HTTP client for the SMS backend, with an async gateway
//! - **workflow**: The add-number / broadcast submission state machine

pub mod broadcast;
pub mod catalog;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod workflow;

pub use broadcast::BroadcastList;
pub use catalog::Catalog;
pub use client::{SmsClient, SmsGateway, SmsGatewayImpl};
pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{CatalogError, ConfigError, SmsApiError};
pub use models::{District, Region};
pub use workflow::{
    AddNumberOutcome, BroadcastOutcome, Notification, NotificationKind, SubmissionState,
    SubmissionWorkflow,
};
