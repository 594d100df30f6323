//! Shared test utilities
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pressure_check::{
    Address, AddressLookup, AddressRequest, AddressResult, ConditionsLookup, Error,
    Pressure, PressureCheck, PressureTrend, Skill, VoiceEvent, WeatherReading,
};
use serde_json::{Value, json};

pub const CONSENT_TOKEN: &str = "Atza|consent-token";
pub const DEVICE_ID: &str = "amzn1.ask.device.TEST";
pub const API_ENDPOINT: &str = "https://api.amazonalexa.com";
pub const APPLICATION_ID: &str = "amzn1.ask.skill.pressure-check";

/// Address lookup that returns a fixed result and records calls
pub struct StubAddress {
    result: AddressResult,
    calls: AtomicUsize,
    last_request: Mutex<Option<AddressRequest>>,
}

impl StubAddress {
    pub fn new(result: AddressResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<AddressRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressLookup for StubAddress {
    async fn full_address(&self, request: &AddressRequest) -> AddressResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.result.clone()
    }
}

/// Conditions lookup that returns a fixed reading (or fails) and records calls
pub struct StubWeather {
    reading: Option<WeatherReading>,
    calls: AtomicUsize,
    last_postal_code: Mutex<Option<String>>,
}

impl StubWeather {
    pub fn returning(reading: WeatherReading) -> Arc<Self> {
        Arc::new(Self {
            reading: Some(reading),
            calls: AtomicUsize::new(0),
            last_postal_code: Mutex::new(None),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reading: None,
            calls: AtomicUsize::new(0),
            last_postal_code: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_postal_code(&self) -> Option<String> {
        self.last_postal_code.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConditionsLookup for StubWeather {
    async fn conditions(&self, postal_code: &str) -> pressure_check::Result<WeatherReading> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_postal_code.lock().unwrap() = Some(postal_code.to_string());
        self.reading
            .clone()
            .ok_or_else(|| Error::Weather("stub conditions failure".to_string()))
    }
}

pub fn springfield() -> Address {
    Address {
        address_line1: Some("742 Evergreen Terrace".to_string()),
        city: Some("Springfield".to_string()),
        state_or_region: Some("OR".to_string()),
        postal_code: Some("00000".to_string()),
        ..Address::default()
    }
}

/// Pressure value as the conditions service would report it
pub fn pressure(text: &str) -> Pressure {
    Pressure::parse(text).expect("finite test pressure")
}

pub fn rising_reading() -> WeatherReading {
    WeatherReading {
        pressure_in_hg: pressure("29.9"),
        pressure_mb: pressure("1012"),
        trend: PressureTrend::Rising,
    }
}

pub fn skill(address: Arc<StubAddress>, weather: Arc<StubWeather>) -> Skill {
    Skill::new(
        PressureCheck::new(address, weather),
        Some(APPLICATION_ID.to_string()),
    )
}

/// Build a request envelope as JSON
pub fn event_json(consent_token: Option<&str>, request: Value) -> Value {
    let permissions = consent_token.map_or_else(|| json!({}), |t| json!({"consentToken": t}));

    json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.TEST",
            "application": {"applicationId": APPLICATION_ID}
        },
        "context": {
            "System": {
                "application": {"applicationId": APPLICATION_ID},
                "user": {
                    "userId": "amzn1.ask.account.TEST",
                    "permissions": permissions
                },
                "device": {"deviceId": DEVICE_ID},
                "apiEndpoint": API_ENDPOINT
            }
        },
        "request": request
    })
}

pub fn intent_request(name: &str) -> Value {
    json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.TEST",
        "locale": "en-US",
        "intent": {"name": name, "slots": {}}
    })
}

pub fn launch_request() -> Value {
    json!({"type": "LaunchRequest", "requestId": "amzn1.echo-api.request.LAUNCH"})
}

pub fn pressure_event(consent_token: Option<&str>) -> VoiceEvent {
    serde_json::from_value(event_json(consent_token, intent_request("GetPressureIntent")))
        .expect("valid test event")
}
