//! WMO condition-code table
//!
//! Maps the integer weather codes returned by the API onto the fixed icon
//! vocabulary of the panel layout. The table is the original thumbnail key of
//! the station; codes outside it fall back to the clear-sky icon.

use serde::{Deserialize, Serialize};

/// Icon identifier for one weather family, with day/night variants where the
/// family has them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ClearDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Overcast,
    Fog,
    Rain,
    RainSnowMix,
    Snow,
    Thunderstorm,
}

impl Icon {
    /// Look up the icon for a WMO weather code
    ///
    /// Unrecognised codes default to [`Icon::ClearDay`].
    #[must_use]
    pub const fn from_weather_code(code: u8) -> Self {
        match code {
            1 | 2 => Self::PartlyCloudyDay,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80..=82 => Self::Rain,
            56 | 57 | 66 | 67 => Self::RainSnowMix,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::ClearDay,
        }
    }

    /// The night-time form of this icon
    ///
    /// Swaps the day token for the night token within the same family;
    /// families without a night form are returned unchanged.
    #[must_use]
    pub const fn night_variant(self) -> Self {
        match self {
            Self::ClearDay => Self::ClearNight,
            Self::PartlyCloudyDay => Self::PartlyCloudyNight,
            other => other,
        }
    }

    /// Stable identifier string, matching the original thumbnail names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudyDay => "partly-cloudy-day",
            Self::PartlyCloudyNight => "partly-cloudy-night",
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::RainSnowMix => "rain-snow-mix",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
