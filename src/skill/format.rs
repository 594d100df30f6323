//! Speech text for a pressure reading

use crate::address::Address;
use crate::weather::WeatherReading;

use super::messages::{
    GET_PRESSURE_MESSAGE, LOCATION_CONNECTOR, PRESSURE_ALT_CONNECTOR, PRESSURE_CONNECTOR,
    PRESSURE_UNITS_IN, PRESSURE_UNITS_MB,
};

/// Render a reading as speech
///
/// Values are written as received, without rounding or locale handling. The
/// location phrase is dropped entirely when the address has no city.
#[must_use]
pub fn format_pressure(address: &Address, reading: &WeatherReading) -> String {
    let location = address
        .city
        .as_deref()
        .filter(|city| !city.is_empty())
        .map(|city| format!("{LOCATION_CONNECTOR}{city}"))
        .unwrap_or_default();

    format!(
        "{GET_PRESSURE_MESSAGE}{location}{PRESSURE_CONNECTOR}{}{PRESSURE_UNITS_IN}{PRESSURE_ALT_CONNECTOR}{}{PRESSURE_UNITS_MB}{}",
        reading.pressure_in_hg,
        reading.pressure_mb,
        reading.trend.phrase()
    )
}
