//! Pressure lookup pipeline
//!
//! Consent check, address lookup, conditions lookup, speech. Every path ends
//! in exactly one [`SpeechResponse`]; upstream failures are logged here and
//! never escape to the caller.

use std::sync::Arc;

use crate::address::{AddressLookup, AddressRequest, AddressResult};
use crate::weather::ConditionsLookup;

use super::event::VoiceEvent;
use super::format::format_pressure;
use super::messages::{
    ERROR, LOCATION_FAILURE, NO_ADDRESS, NOTIFY_MISSING_PERMISSIONS, PERMISSIONS,
};
use super::response::SpeechResponse;

/// Answers the pressure intent for one event at a time
#[derive(Clone)]
pub struct PressureCheck {
    address: Arc<dyn AddressLookup>,
    weather: Arc<dyn ConditionsLookup>,
}

impl PressureCheck {
    #[must_use]
    pub fn new(address: Arc<dyn AddressLookup>, weather: Arc<dyn ConditionsLookup>) -> Self {
        Self { address, weather }
    }

    /// Run the pipeline for `event`
    pub async fn handle(&self, event: &VoiceEvent) -> SpeechResponse {
        let Some(consent_token) = event.consent_token() else {
            tracing::info!("user did not grant permission to read their address");
            return SpeechResponse::tell_with_permission_card(
                NOTIFY_MISSING_PERMISSIONS,
                PERMISSIONS,
            );
        };

        let request = AddressRequest {
            api_endpoint: event.api_endpoint().to_string(),
            device_id: event.device_id().to_string(),
            consent_token: consent_token.to_string(),
        };

        let address = match self.address.full_address(&request).await {
            AddressResult::Found(address) => {
                tracing::info!(
                    city = ?address.city,
                    postal_code = ?address.postal_code,
                    "address retrieved"
                );
                address
            }
            AddressResult::NoAddressSet => {
                tracing::info!("device address lookup succeeded but no address is set");
                return SpeechResponse::tell(NO_ADDRESS);
            }
            AddressResult::Forbidden => {
                tracing::info!("consent token was not authorized to read the address");
                return SpeechResponse::tell_with_permission_card(
                    NOTIFY_MISSING_PERMISSIONS,
                    PERMISSIONS,
                );
            }
            AddressResult::OtherFailure(status) => {
                tracing::warn!(status, "device address lookup failed");
                return SpeechResponse::ask(LOCATION_FAILURE, LOCATION_FAILURE);
            }
            AddressResult::TransportError(cause) => {
                tracing::error!(cause = %cause, "device address request failed");
                return SpeechResponse::tell(ERROR);
            }
        };

        let postal_code = address.postal_code.as_deref().unwrap_or_default();
        match self.weather.conditions(postal_code).await {
            Ok(reading) => SpeechResponse::tell(format_pressure(&address, &reading)),
            Err(e) => {
                tracing::error!(error = %e, postal_code = %postal_code, "conditions lookup failed");
                SpeechResponse::tell(ERROR)
            }
        }
    }
}
