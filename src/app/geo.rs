//! Geolocation Acquisition
//!
//! Coordinates are acquired on demand through the [`LocationSource`] seam:
//! one operation that either yields a [`GeoSample`] or a typed
//! [`GeoError`] cause. The shipped source probes an HTTP geolocation
//! endpoint; views and tests depend only on the trait.
//!
//! Unlike resource calls, the probe carries its own short timeout — a
//! location request that hangs must surface as the timeout cause instead
//! of never resolving.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One resolved coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoSample {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a location request failed. Each cause maps to its own user-facing
/// message; all are recoverable via manual retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("unknown location failure")]
    Unknown,
}

impl GeoError {
    /// Message shown to the user for this cause
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::PermissionDenied => {
                "Location permission denied. Please allow location access."
            }
            GeoError::Unavailable => {
                "Location information is unavailable. Please check that location services are enabled."
            }
            GeoError::Timeout => "Location request timed out. Please try again.",
            GeoError::Unknown => "An unknown error occurred while fetching location.",
        }
    }
}

/// A device or service that can resolve the current position.
pub trait LocationSource: Send + Sync {
    fn current_position(&self) -> Result<GeoSample, GeoError>;
}

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Location source backed by an HTTP geolocation endpoint returning
/// `{ "latitude": .., "longitude": .. }`.
pub struct HttpLocationSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpLocationSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }
}

impl LocationSource for HttpLocationSource {
    fn current_position(&self) -> Result<GeoSample, GeoError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .map_err(classify_transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeoError::PermissionDenied);
        }
        if !status.is_success() {
            tracing::warn!(%status, url = %self.url, "location probe rejected");
            return Err(GeoError::Unavailable);
        }

        response.json().map_err(|e| {
            tracing::warn!(error = %e, url = %self.url, "location probe returned malformed body");
            GeoError::Unknown
        })
    }
}

fn classify_transport(error: reqwest::Error) -> GeoError {
    if error.is_timeout() {
        GeoError::Timeout
    } else if error.is_connect() {
        GeoError::Unavailable
    } else {
        tracing::warn!(error = %error, "location probe transport failure");
        GeoError::Unknown
    }
}
