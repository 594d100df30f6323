//! TOML configuration file loading
//!
//! Supports `~/.config/pressure-check/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct PressureCheckConfigFile {
    /// Voice skill configuration
    #[serde(default)]
    pub skill: SkillFileConfig,

    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherFileConfig,

    /// Server/runtime configuration
    #[serde(default)]
    pub server: ServerFileConfig,
}

/// Voice skill configuration
#[derive(Debug, Default, Deserialize)]
pub struct SkillFileConfig {
    /// Application id the voice platform stamps on every request
    pub application_id: Option<String>,
}

/// Weather service configuration
#[derive(Debug, Default, Deserialize)]
pub struct WeatherFileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Server/runtime configuration
#[derive(Debug, Default, Deserialize)]
pub struct ServerFileConfig {
    /// HTTP port
    pub port: Option<u16>,

    /// Timeout applied to each upstream request
    pub http_timeout_secs: Option<u64>,
}

/// Load the TOML config file from the standard path
///
/// Returns `PressureCheckConfigFile::default()` if the file doesn't exist or can't be parsed.
#[must_use]
pub fn load_config_file() -> PressureCheckConfigFile {
    config_file_path().map_or_else(PressureCheckConfigFile::default, |path| {
        load_config_file_from(&path)
    })
}

/// Load a TOML config file from an explicit path
///
/// Same fallback rules as [`load_config_file`].
#[must_use]
pub fn load_config_file_from(path: &Path) -> PressureCheckConfigFile {
    if !path.exists() {
        return PressureCheckConfigFile::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                PressureCheckConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            PressureCheckConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/pressure-check/config.toml`
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("pressure-check").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_file() {
        let fc: PressureCheckConfigFile = toml::from_str(
            r#"
            [weather]
            api_key = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(fc.weather.api_key.as_deref(), Some("abc123"));
        assert!(fc.weather.base_url.is_none());
        assert!(fc.skill.application_id.is_none());
        assert!(fc.server.port.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let fc = load_config_file_from(Path::new("/nonexistent/pressure-check/config.toml"));
        assert!(fc.weather.api_key.is_none());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let fc = load_config_file_from(&path);
        assert!(fc.server.port.is_none());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 8080\nhttp_timeout_secs = 4\n").unwrap();

        let fc = load_config_file_from(&path);
        assert_eq!(fc.server.port, Some(8080));
        assert_eq!(fc.server.http_timeout_secs, Some(4));
    }
}
