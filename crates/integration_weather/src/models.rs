//! Raw Open-Meteo response shapes
//!
//! Field names follow the upstream JSON exactly; conversion into the domain
//! observation happens in the client.

use serde::Deserialize;

/// Top-level forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Offset of the requested timezone from UTC, in seconds
    #[serde(default)]
    pub utc_offset_seconds: i32,
    /// Current-conditions block
    pub current: Option<CurrentData>,
    /// Daily block carrying sunrise/sunset
    pub daily: Option<DailyData>,
}

/// Current-conditions block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub weather_code: u8,
    pub temperature_2m: f32,
    pub apparent_temperature: f32,
    pub relative_humidity_2m: u8,
    pub windspeed_10m: f32,
    pub wind_gusts_10m: f32,
    pub winddirection_10m: u16,
}

/// Daily block, one entry per forecast day
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}
