//! Measurement units for the upstream request and on-panel labels

use serde::{Deserialize, Serialize};

/// Wind speed unit accepted by the Open-Meteo API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    /// Kilometres per hour
    Kmh,
    /// Metres per second
    Ms,
    /// Miles per hour (default)
    #[default]
    Mph,
    /// Knots
    Kn,
}

impl WindUnit {
    /// Query-parameter value understood by the API
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Kmh => "kmh",
            Self::Ms => "ms",
            Self::Mph => "mph",
            Self::Kn => "kn",
        }
    }

    /// Label rendered next to wind speeds
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kmh => "KM/H",
            Self::Ms => "M/S",
            Self::Mph => "MPH",
            Self::Kn => "knots",
        }
    }
}

/// Temperature unit accepted by the Open-Meteo API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit (default)
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Query-parameter value understood by the API
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Symbol rendered next to temperatures
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Unit selection for one station, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Units {
    /// Wind speed unit
    #[serde(default)]
    pub wind: WindUnit,
    /// Temperature unit
    #[serde(default)]
    pub temperature: TemperatureUnit,
}
