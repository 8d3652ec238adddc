//! Open-Meteo weather client
//!
//! Issues one forecast request per tick and converts the response into a
//! [`WeatherObservation`]. The request asks for the current-conditions fields
//! plus one day of sunrise/sunset, in the station's units and timezone.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use domain::{Units, WeatherObservation};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::FetchError;
use crate::models::ApiResponse;

/// Current-conditions fields requested from the API
const CURRENT_FIELDS: &str = "weather_code,temperature_2m,apparent_temperature,\
                              relative_humidity_2m,windspeed_10m,wind_gusts_10m,\
                              winddirection_10m";

/// Daily fields requested from the API
const DAILY_FIELDS: &str = "sunrise,sunset";

/// Weather integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// IANA timezone the forecast (and the panel clock) is expressed in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Wind and temperature units for the request and the panel labels
    #[serde(default)]
    pub units: Units,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            timezone: default_timezone(),
            units: Units::default(),
        }
    }
}

/// Weather client trait, the seam the tick pipeline is written against
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the current observation for a location
    async fn fetch_observation(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, FetchError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), FetchError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(FetchError::Decode(format!(
                "invalid coordinates: {latitude}, {longitude}"
            )));
        }
        Ok(())
    }

    /// Query parameters for one forecast request
    fn query_params(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("wind_speed_unit", self.config.units.wind.api_value().to_string()),
            (
                "temperature_unit",
                self.config.units.temperature.api_value().to_string(),
            ),
            ("timezone", self.config.timezone.clone()),
            ("forecast_days", "1".to_string()),
        ]
    }

    /// Convert a raw response into the domain observation
    ///
    /// Sunrise/sunset arrive as naive local timestamps; the response's UTC
    /// offset turns them into instants.
    fn parse_observation(resp: &ApiResponse) -> Result<WeatherObservation, FetchError> {
        let current = resp
            .current
            .as_ref()
            .ok_or_else(|| FetchError::Decode("no current block in response".to_string()))?;
        let daily = resp
            .daily
            .as_ref()
            .ok_or_else(|| FetchError::Decode("no daily block in response".to_string()))?;

        let sunrise_raw = daily
            .sunrise
            .first()
            .ok_or_else(|| FetchError::Decode("empty sunrise list".to_string()))?;
        let sunset_raw = daily
            .sunset
            .first()
            .ok_or_else(|| FetchError::Decode("empty sunset list".to_string()))?;

        let sunrise = Self::parse_local_datetime(sunrise_raw, resp.utc_offset_seconds)?;
        let sunset = Self::parse_local_datetime(sunset_raw, resp.utc_offset_seconds)?;

        Ok(WeatherObservation {
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            wind_speed: current.windspeed_10m,
            wind_gusts: current.wind_gusts_10m,
            wind_direction: current.winddirection_10m,
            humidity: current.relative_humidity_2m,
            weather_code: current.weather_code,
            sunrise,
            sunset,
        })
    }

    /// Parse an API timestamp at the given UTC offset into an instant
    fn parse_local_datetime(s: &str, offset_seconds: i32) -> Result<DateTime<Utc>, FetchError> {
        // RFC 3339 timestamps already carry their offset
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|e| FetchError::Decode(format!("invalid datetime {s:?}: {e}")))?;

        let offset = FixedOffset::east_opt(offset_seconds)
            .ok_or_else(|| FetchError::Decode(format!("invalid utc offset {offset_seconds}")))?;

        naive
            .and_local_timezone(offset)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| FetchError::Decode(format!("ambiguous local datetime {s:?}")))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_observation(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, FetchError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, "Fetching current observation");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(latitude, longitude))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if status.is_server_error() {
            return Err(FetchError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(FetchError::Transport(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Self::parse_observation(&api_response)
    }
}
