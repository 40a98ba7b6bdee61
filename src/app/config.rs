use crate::shared::config::{AppConfig, ConfigError};

/// Default backend origin
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Application configuration wrapper.
///
/// Owns the resolved [`AppConfig`] and the defaults applied on top of it.
/// Every resource call goes through [`Config::api_url`]; there is exactly
/// one backend origin.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration from the config file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            app: AppConfig::load()?,
        })
    }

    pub fn from_app(app: AppConfig) -> Self {
        Self { app }
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Full URL for an API endpoint path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    /// Geolocation probe endpoint; `None` means geotagging is unavailable
    pub fn location_url(&self) -> Option<&str> {
        self.app.location_url.as_deref()
    }
}
