//! Weather conditions lookup
//!
//! Client for the Weather Underground conditions API. Only the pressure
//! fields of `current_observation` are read.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Direction of the recent pressure change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureTrend {
    Rising,
    Falling,
    Steady,
}

impl PressureTrend {
    /// Decode the service's trend symbol
    ///
    /// `"+"` is rising, `"-"` is falling, anything else (including `"0"` or
    /// an absent field) is steady.
    #[must_use]
    pub fn from_symbol(symbol: Option<&str>) -> Self {
        match symbol {
            Some("+") => Self::Rising,
            Some("-") => Self::Falling,
            _ => Self::Steady,
        }
    }

    /// Phrase appended to the spoken reading
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Rising => " and rising",
            Self::Falling => " and falling",
            Self::Steady => "",
        }
    }
}

/// A pressure value as the service reported it
///
/// Holds the source text for speech alongside the parsed value. Only finite
/// numbers are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Pressure {
    value: f64,
    text: String,
}

impl Pressure {
    /// Parse a reported value, keeping its text verbatim (trimmed)
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let value: f64 = text.parse().ok()?;
        value.is_finite().then(|| Self {
            value,
            text: text.to_string(),
        })
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Current pressure reading
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Pressure in inches of mercury
    pub pressure_in_hg: Pressure,
    /// Pressure in millibars
    pub pressure_mb: Pressure,
    pub trend: PressureTrend,
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inHg / {} mb ({:?})",
            self.pressure_in_hg, self.pressure_mb, self.trend
        )
    }
}

/// Looks up current conditions for a postal code
#[async_trait]
pub trait ConditionsLookup: Send + Sync {
    /// Fetch the current pressure reading
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response carries no reading
    async fn conditions(&self, postal_code: &str) -> Result<WeatherReading>;
}

/// Conditions API response envelope
#[derive(Debug, Deserialize)]
struct ConditionsResponse {
    #[serde(default)]
    response: Option<ResponseMeta>,
    #[serde(default)]
    current_observation: Option<CurrentObservation>,
}

#[derive(Debug, Deserialize)]
struct ResponseMeta {
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Observation block; pressures arrive as strings or numbers
#[derive(Debug, Deserialize)]
struct CurrentObservation {
    #[serde(default)]
    pressure_in: Value,
    #[serde(default)]
    pressure_mb: Value,
    #[serde(default)]
    pressure_trend: Option<String>,
}

/// Parse a conditions API body into a reading
///
/// # Errors
///
/// Returns `Error::Weather` if the service reported an error, the observation
/// is missing, or a pressure value is not numeric
pub fn parse_conditions(body: &str) -> Result<WeatherReading> {
    let parsed: ConditionsResponse = serde_json::from_str(body)?;

    if let Some(err) = parsed.response.and_then(|meta| meta.error) {
        return Err(Error::Weather(format!(
            "{}: {}",
            err.kind.as_deref().unwrap_or("unknown"),
            err.description.as_deref().unwrap_or("no description")
        )));
    }

    let observation = parsed
        .current_observation
        .ok_or_else(|| Error::Weather("response has no current_observation".to_string()))?;

    Ok(WeatherReading {
        pressure_in_hg: pressure_value("pressure_in", &observation.pressure_in)?,
        pressure_mb: pressure_value("pressure_mb", &observation.pressure_mb)?,
        trend: PressureTrend::from_symbol(observation.pressure_trend.as_deref()),
    })
}

fn pressure_value(field: &str, value: &Value) -> Result<Pressure> {
    let parsed = match value {
        Value::Number(n) => Pressure::parse(&n.to_string()),
        Value::String(s) => Pressure::parse(s),
        _ => None,
    };
    parsed.ok_or_else(|| Error::Weather(format!("{field} is not a finite number: {value}")))
}

/// HTTP client for the conditions API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new conditions client
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing or the HTTP client cannot be built
    pub fn new(api_key: String, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, api_key, base_url)
    }

    /// Create a conditions client around an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing
    pub fn with_client(
        client: Client,
        api_key: String,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Config(
                "weather API key required for conditions lookup".to_string(),
            ));
        }

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn conditions_url(&self, postal_code: &str) -> String {
        format!(
            "{}/api/{}/conditions/q/{}.json",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(postal_code)
        )
    }
}

#[async_trait]
impl ConditionsLookup for WeatherClient {
    async fn conditions(&self, postal_code: &str) -> Result<WeatherReading> {
        tracing::debug!(postal_code = %postal_code, "requesting current conditions");

        let response = self
            .client
            .get(self.conditions_url(postal_code))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "conditions request failed");
                e
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "received conditions response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "conditions API error");
            return Err(Error::Weather(format!(
                "conditions API error {status}: {body}"
            )));
        }

        let body = response.text().await?;
        let reading = parse_conditions(&body).map_err(|e| {
            tracing::error!(error = %e, "failed to parse conditions response");
            e
        })?;

        tracing::info!(postal_code = %postal_code, %reading, "conditions retrieved");
        Ok(reading)
    }
}
