//! Async gateway over the synchronous SmsClient.
//!
//! The workflow suspends at its two network calls; this module provides that
//! async seam by running the synchronous HTTP operations under
//! `tokio::task::spawn_blocking`, keeping the async runtime unblocked.

use crate::client::SmsClient;
use crate::domain::PhoneNumber;
use crate::error::{SmsApiError, SmsApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the SMS broadcast backend.
///
/// The submission workflow depends on this trait rather than on the concrete
/// client, so tests can substitute a mock gateway.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Register one phone number for a district.
    async fn add_phone_number(
        &self,
        region: &str,
        district: &str,
        number: &PhoneNumber,
    ) -> SmsApiResult<serde_json::Value>;

    /// Request an SMS broadcast to the given recipient list.
    async fn broadcast_sms(
        &self,
        region: &str,
        district: &str,
        phone_numbers: &[String],
    ) -> SmsApiResult<serde_json::Value>;
}

/// `SmsGateway` backed by the synchronous `SmsClient`.
#[derive(Clone)]
pub struct SmsGatewayImpl {
    client: Arc<SmsClient>,
}

impl SmsGatewayImpl {
    pub fn new(client: SmsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl SmsGateway for SmsGatewayImpl {
    async fn add_phone_number(
        &self,
        region: &str,
        district: &str,
        number: &PhoneNumber,
    ) -> SmsApiResult<serde_json::Value> {
        let client = self.client.clone();
        let region = region.to_string();
        let district = district.to_string();
        let number = number.clone();

        tokio::task::spawn_blocking(move || client.add_phone_number(&region, &district, &number))
            .await
            .map_err(|e| SmsApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn broadcast_sms(
        &self,
        region: &str,
        district: &str,
        phone_numbers: &[String],
    ) -> SmsApiResult<serde_json::Value> {
        let client = self.client.clone();
        let region = region.to_string();
        let district = district.to_string();
        let phone_numbers = phone_numbers.to_vec();

        tokio::task::spawn_blocking(move || {
            client.broadcast_sms(&region, &district, &phone_numbers)
        })
        .await
        .map_err(|e| SmsApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
