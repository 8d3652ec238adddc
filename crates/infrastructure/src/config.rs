//! Application configuration
//!
//! Loaded from an optional `config.toml` with environment variable
//! overrides (e.g. `INKSTATION_LOCATION_LATITUDE`). Every field carries a
//! default so the station runs without any configuration at all.

use chrono_tz::Tz;
use integration_scoreboard::ScoreboardConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::RetryConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Loading or deserializing the configuration failed
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The configured timezone is not a valid IANA name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Observed location
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in decimal degrees (default: Minneapolis)
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_latitude() -> f64 {
    44.9833
}

fn default_longitude() -> f64 {
    -93.2667
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location the station reports weather for
    #[serde(default)]
    pub location: LocationConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Retry behavior for weather fetches
    #[serde(default)]
    pub retry: RetryConfig,

    /// Scoreboard integration configuration
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if an
    /// environment override has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific file stem
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("INKSTATION")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parse the configured timezone into a [`Tz`]
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is not a valid IANA name.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.weather
            .timezone
            .parse()
            .map_err(|_| ConfigError::InvalidTimezone(self.weather.timezone.clone()))
    }
}
