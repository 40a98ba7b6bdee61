//! Application Configuration
//!
//! Configuration for the client: the backend origin every resource call is
//! made against and the optional geolocation probe endpoint. Values are
//! resolved in order: optional TOML file in the platform config directory,
//! then environment overrides. URLs are validated at build time so a bad
//! origin fails on startup rather than on the first request.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment override for the backend origin
pub const ENV_API_URL: &str = "CIVIPOST_API_URL";

/// Environment override for the geolocation probe endpoint
pub const ENV_LOCATION_URL: &str = "CIVIPOST_LOCATION_URL";

const CONFIG_FILE: &str = "config.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured URL is not an http(s) origin
    #[error("invalid url '{0}': expected an http(s) origin")]
    InvalidUrl(String),

    /// The config file exists but could not be read
    #[error("could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML
    #[error("could not parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Validated application configuration.
///
/// `None` fields fall back to defaults owned by the app-side wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend origin, e.g. `http://127.0.0.1:5000`
    pub server_url: Option<String>,
    /// Geolocation probe endpoint; absent means geotagging is unavailable
    pub location_url: Option<String>,
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve configuration from the platform config file (if present)
    /// and environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = match Self::config_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => AppConfigBuilder::default(),
        };

        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.server_url(url);
        }
        if let Ok(url) = std::env::var(ENV_LOCATION_URL) {
            builder = builder.location_url(url);
        }

        builder.build()
    }

    /// Load configuration from a specific TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::read_file(path)?.build()
    }

    fn read_file(path: &Path) -> Result<AppConfigBuilder, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: AppConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut builder = AppConfigBuilder::default();
        if let Some(url) = parsed.server_url {
            builder = builder.server_url(url);
        }
        if let Some(url) = parsed.location_url {
            builder = builder.location_url(url);
        }
        Ok(builder)
    }

    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("civipost");
        path.push(CONFIG_FILE);
        Some(path)
    }
}

/// Builder for [`AppConfig`] with URL validation.
#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    location_url: Option<String>,
}

impl AppConfigBuilder {
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn location_url(mut self, url: impl Into<String>) -> Self {
        self.location_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<AppConfig, ConfigError> {
        Ok(AppConfig {
            server_url: self.server_url.map(normalize_url).transpose()?,
            location_url: self.location_url.map(normalize_url).transpose()?,
        })
    }
}

/// Require an http(s) scheme and strip any trailing slash so paths can be
/// joined with plain concatenation.
fn normalize_url(url: String) -> Result<String, ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidUrl(url));
    }
    Ok(url.trim_end_matches('/').to_string())
}
