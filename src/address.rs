//! Device address lookup
//!
//! Client for the voice platform's device address service. The consent token
//! the user granted is sent as a bearer credential; the HTTP status is decoded
//! once here into an [`AddressResult`] so callers never branch on raw codes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Postal address configured for a device
///
/// Only `postal_code` and `city` are inspected by the skill; the rest is
/// carried for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_or_region: Option<String>,
    #[serde(default)]
    pub district_or_county: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Parameters for a single address lookup
#[derive(Debug, Clone)]
pub struct AddressRequest {
    /// Regional API endpoint supplied with the voice event
    pub api_endpoint: String,
    /// Device the request came from
    pub device_id: String,
    /// Consent token granted by the user
    pub consent_token: String,
}

/// Outcome of an address lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressResult {
    /// 200 with an address body
    Found(Address),
    /// 204, or a 200 carrying no address: the user never set one
    NoAddressSet,
    /// 403: the consent token was rejected
    Forbidden,
    /// Any other status
    OtherFailure(u16),
    /// The request itself failed or the body was unreadable
    TransportError(String),
}

impl AddressResult {
    /// Decode a device address service response
    #[must_use]
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::OK => match serde_json::from_str::<Option<Address>>(body) {
                Ok(Some(address)) => Self::Found(address),
                Ok(None) => Self::NoAddressSet,
                Err(e) => Self::TransportError(format!("invalid address payload: {e}")),
            },
            StatusCode::NO_CONTENT => Self::NoAddressSet,
            StatusCode::FORBIDDEN => Self::Forbidden,
            other => Self::OtherFailure(other.as_u16()),
        }
    }
}

/// Looks up the address configured for a device
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Fetch the full address for the device in `request`
    ///
    /// Never fails: every failure is one of the [`AddressResult`] variants.
    async fn full_address(&self, request: &AddressRequest) -> AddressResult;
}

/// HTTP client for the device address service
#[derive(Debug, Clone)]
pub struct DeviceAddressClient {
    client: Client,
}

impl DeviceAddressClient {
    /// Create a client whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Create a client around an existing `reqwest::Client`
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Full-address URL for a device
    fn address_url(request: &AddressRequest) -> String {
        format!(
            "{}/v1/devices/{}/settings/address",
            request.api_endpoint.trim_end_matches('/'),
            urlencoding::encode(&request.device_id)
        )
    }
}

#[async_trait]
impl AddressLookup for DeviceAddressClient {
    async fn full_address(&self, request: &AddressRequest) -> AddressResult {
        let url = Self::address_url(request);
        tracing::debug!(url = %url, "requesting device address");

        let response = match self
            .client
            .get(&url)
            .bearer_auth(&request.consent_token)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "device address request failed");
                return AddressResult::TransportError(e.to_string());
            }
        };

        let status = response.status();
        tracing::debug!(status = %status, "received device address response");

        if status != StatusCode::OK {
            return AddressResult::from_response(status, "");
        }

        match response.text().await {
            Ok(body) => AddressResult::from_response(status, &body),
            Err(e) => {
                tracing::error!(error = %e, "failed to read device address body");
                AddressResult::TransportError(e.to_string())
            }
        }
    }
}
