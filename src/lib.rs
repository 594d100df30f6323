//! Pressure Check - voice skill reporting the barometric pressure at the device's address
//!
//! Each request flows one way through two upstream services:
//!
//! ```text
//! voice event ─▶ consent check ─▶ device address ─▶ current conditions ─▶ speech
//!                     │                 │                   │
//!                     └─ permission     └─ no address /     └─ error
//!                        card              permission card /
//!                                          retry prompt / error
//! ```

pub mod address;
pub mod api;
pub mod config;
pub mod error;
pub mod skill;
pub mod weather;

pub use address::{Address, AddressLookup, AddressRequest, AddressResult, DeviceAddressClient};
pub use config::Config;
pub use error::{Error, Result};
pub use skill::{
    Intent, PressureCheck, ResponseEnvelope, Skill, SpeechResponse, VoiceEvent, format_pressure,
};
pub use weather::{ConditionsLookup, Pressure, PressureTrend, WeatherClient, WeatherReading};
