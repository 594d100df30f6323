//! Configuration management for the pressure check skill

pub mod file;

use std::time::Duration;

use file::PressureCheckConfigFile;

use crate::{Error, Result};

/// Default conditions service base URL
pub const DEFAULT_WEATHER_URL: &str = "http://api.wunderground.com";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default upstream request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Pressure check configuration
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Voice skill configuration
    pub skill: SkillConfig,

    /// Weather service configuration
    pub weather: WeatherConfig,

    /// HTTP server configuration
    pub server: ServerConfig,
}

/// Voice skill configuration
#[derive(Debug, Clone, Default)]
pub struct SkillConfig {
    /// Expected application id; `None` accepts every request
    pub application_id: Option<String>,
}

/// Weather conditions service configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key for the conditions service
    pub api_key: Option<String>,

    /// Base URL of the conditions service
    pub base_url: String,
}

/// HTTP server and upstream transport configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Timeout applied to each upstream request
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from the config file and process environment
    ///
    /// Priority is env > toml > default.
    ///
    /// # Errors
    ///
    /// Returns error if an environment override cannot be parsed
    pub fn load() -> Result<Self> {
        let fc = file::load_config_file();
        Self::resolve(fc, |key| std::env::var(key).ok())
    }

    /// Resolve configuration from a parsed config file and an env lookup
    ///
    /// # Errors
    ///
    /// Returns error if a numeric override cannot be parsed
    pub fn resolve<F>(fc: PressureCheckConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let skill = SkillConfig {
            application_id: env("PRESSURE_CHECK_SKILL_ID")
                .or(fc.skill.application_id)
                .filter(|id| !id.is_empty()),
        };

        let weather = WeatherConfig {
            api_key: env("WUNDERGROUND_API_KEY")
                .or(fc.weather.api_key)
                .filter(|key| !key.is_empty()),
            base_url: env("WUNDERGROUND_URL")
                .or(fc.weather.base_url)
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        let port = match env("PRESSURE_CHECK_PORT").or_else(|| env("PORT")) {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("invalid port {raw:?}: {e}")))?,
            None => fc.server.port.unwrap_or(DEFAULT_PORT),
        };

        let timeout_secs = match env("PRESSURE_CHECK_HTTP_TIMEOUT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("invalid http timeout {raw:?}: {e}")))?,
            None => fc
                .server
                .http_timeout_secs
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(Error::Config(
                "http timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            skill,
            weather,
            server: ServerConfig {
                port,
                http_timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    /// API key for the conditions service
    ///
    /// # Errors
    ///
    /// Returns error if no key is configured
    pub fn weather_api_key(&self) -> Result<&str> {
        self.weather.api_key.as_deref().ok_or_else(|| {
            Error::Config(
                "weather API key required (set WUNDERGROUND_API_KEY or weather.api_key)"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::file::{ServerFileConfig, SkillFileConfig, WeatherFileConfig};
    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::resolve(PressureCheckConfigFile::default(), env_from(&[])).unwrap();

        assert!(config.skill.application_id.is_none());
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.http_timeout, Duration::from_secs(10));
        assert!(config.weather_api_key().is_err());
    }

    #[test]
    fn env_overrides_file() {
        let fc = PressureCheckConfigFile {
            skill: SkillFileConfig {
                application_id: Some("amzn1.ask.skill.file".to_string()),
            },
            weather: WeatherFileConfig {
                api_key: Some("file-key".to_string()),
                base_url: Some("http://weather.test/".to_string()),
            },
            server: ServerFileConfig {
                port: Some(8080),
                http_timeout_secs: Some(3),
            },
        };

        let config = Config::resolve(
            fc,
            env_from(&[
                ("WUNDERGROUND_API_KEY", "env-key"),
                ("PRESSURE_CHECK_PORT", "9000"),
            ]),
        )
        .unwrap();

        assert_eq!(
            config.skill.application_id.as_deref(),
            Some("amzn1.ask.skill.file")
        );
        assert_eq!(config.weather_api_key().unwrap(), "env-key");
        assert_eq!(config.weather.base_url, "http://weather.test");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn falls_back_to_generic_port_variable() {
        let config = Config::resolve(
            PressureCheckConfigFile::default(),
            env_from(&[("PORT", "4321")]),
        )
        .unwrap();

        assert_eq!(config.server.port, 4321);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::resolve(
            PressureCheckConfigFile::default(),
            env_from(&[("PRESSURE_CHECK_SKILL_ID", ""), ("WUNDERGROUND_API_KEY", "")]),
        )
        .unwrap();

        assert!(config.skill.application_id.is_none());
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn rejects_unparsable_port() {
        let result = Config::resolve(
            PressureCheckConfigFile::default(),
            env_from(&[("PRESSURE_CHECK_PORT", "not-a-port")]),
        );

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = Config::resolve(
            PressureCheckConfigFile::default(),
            env_from(&[("PRESSURE_CHECK_HTTP_TIMEOUT", "0")]),
        );
        assert!(matches!(result, Err(Error::Config(_))));

        let fc = PressureCheckConfigFile {
            server: ServerFileConfig {
                http_timeout_secs: Some(0),
                ..ServerFileConfig::default()
            },
            ..PressureCheckConfigFile::default()
        };
        assert!(matches!(
            Config::resolve(fc, env_from(&[])),
            Err(Error::Config(_))
        ));
    }
}
