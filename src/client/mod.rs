//! HTTP client for the SMS broadcast backend.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles URL
//! construction for the two backend endpoints and maps transport and status
//! failures into `SmsApiError`.

mod async_gateway;
pub use async_gateway::{SmsGateway, SmsGatewayImpl};

use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::error::{SmsApiError, SmsApiResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Body of the add-number request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddNumberRequest<'a> {
    region: &'a str,
    district: &'a str,
    phone_number: &'a str,
}

/// Body of the broadcast request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BroadcastRequest<'a> {
    region: &'a str,
    district: &'a str,
    phone_numbers: &'a [String],
}

/// Synchronous HTTP client for the SMS broadcast backend.
///
/// The two endpoints are independently addressed: add-number requests are
/// built from a base URL, while the broadcast endpoint is a full address.
/// One request per call, no automatic retries; the agent timeout is the only
/// bound on a hung backend.
#[derive(Clone)]
pub struct SmsClient {
    /// Base URL for the add-number endpoint family
    add_number_base: String,

    /// Full URL of the broadcast endpoint
    broadcast_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl SmsClient {
    /// Create a new SmsClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.add_number_api_url.clone(),
            config.broadcast_api_url.clone(),
            config.request_timeout,
        )
    }

    /// Create an SmsClient with explicit endpoint addresses (useful for testing).
    #[doc(hidden)]
    pub fn with_urls(add_number_base: String, broadcast_url: String) -> Self {
        Self::build(add_number_base, broadcast_url, 10)
    }

    fn build(add_number_base: String, broadcast_url: String, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Self {
            add_number_base,
            broadcast_url,
            agent: Arc::new(agent),
        }
    }

    /// Build the add-number URL for a district.
    fn add_number_url(&self, district: &str) -> String {
        let base = self.add_number_base.trim_end_matches('/');
        format!(
            "{}/districts/{}/phone-numbers",
            base,
            urlencoding::encode(district)
        )
    }

    /// Register one phone number with the backend.
    ///
    /// POSTs `{region, district, phoneNumber}` to
    /// `{base}/districts/{district}/phone-numbers`. Any 2xx response is a
    /// success; the response body is JSON of unconstrained shape.
    pub fn add_phone_number(
        &self,
        region: &str,
        district: &str,
        number: &PhoneNumber,
    ) -> SmsApiResult<serde_json::Value> {
        let url = self.add_number_url(district);
        let request = AddNumberRequest {
            region,
            district,
            phone_number: number.as_str(),
        };
        let body = serde_json::to_value(&request).map_err(SmsApiError::JsonError)?;
        self.post(&url, &body)
    }

    /// Request an SMS broadcast to the full recipient list.
    ///
    /// POSTs `{region, district, phoneNumbers}` to the configured broadcast
    /// endpoint. Success and failure semantics match `add_phone_number`.
    pub fn broadcast_sms(
        &self,
        region: &str,
        district: &str,
        phone_numbers: &[String],
    ) -> SmsApiResult<serde_json::Value> {
        let request = BroadcastRequest {
            region,
            district,
            phone_numbers,
        };
        let body = serde_json::to_value(&request).map_err(SmsApiError::JsonError)?;
        self.post(&self.broadcast_url, &body)
    }

    /// Execute a POST request with a JSON body and parse the JSON response.
    fn post(&self, url: &str, body: &serde_json::Value) -> SmsApiResult<serde_json::Value> {
        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(Self::map_error);

        match response {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                let text = response
                    .into_string()
                    .map_err(|e| SmsApiError::HttpError(e.to_string()))?;
                serde_json::from_str(&text).map_err(SmsApiError::JsonError)
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                Err(e)
            }
        }
    }

    /// Map a ureq error to an SmsApiError.
    ///
    /// Non-success statuses carry the optional `message` field of the JSON
    /// error body; transport failures are folded into timeout/connection
    /// variants.
    fn map_error(error: ureq::Error) -> SmsApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| {
                        v.get("message")
                            .and_then(|m| m.as_str())
                            .map(str::to_string)
                    });

                SmsApiError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => {
                let kind = transport.kind();
                let message = transport.to_string();
                Self::classify_transport(kind, &message)
            }
        }
    }

    /// Fold a transport failure into the error taxonomy.
    ///
    /// `Timeout` is reserved for actual timeouts; other Io failures (resets,
    /// truncated responses) stay generic transport errors.
    fn classify_transport(kind: ureq::ErrorKind, message: &str) -> SmsApiError {
        if kind == ureq::ErrorKind::ConnectionFailed {
            SmsApiError::HttpError("Connection failed".to_string())
        } else if kind == ureq::ErrorKind::Io && message.contains("timed out") {
            SmsApiError::Timeout
        } else {
            SmsApiError::HttpError(message.to_string())
        }
    }
}
