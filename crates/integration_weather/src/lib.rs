//! Open-Meteo integration
//!
//! HTTP client and response models for fetching the current observation that
//! drives the panel. Transport failures are retryable; malformed bodies are
//! not, since retry cannot fix a bad payload.

mod client;
mod error;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig};
pub use error::FetchError;
pub use models::{ApiResponse, CurrentData, DailyData};
