//! Per-tick weather data
//!
//! One [`WeatherObservation`] lives for exactly one tick. The observation (or
//! the failure that replaced it) travels through the renderer to the output
//! sink inside a [`TickContext`], so each tick's data flow is explicit and
//! nothing is shared between ticks.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::daylight::is_night;

/// A single current-conditions observation, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature in the configured unit
    pub temperature: f32,
    /// Apparent (feels like) temperature in the configured unit
    pub apparent_temperature: f32,
    /// Wind speed in the configured unit
    pub wind_speed: f32,
    /// Wind gust speed in the configured unit
    pub wind_gusts: f32,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// WMO weather code
    pub weather_code: u8,
    /// Today's sunrise instant
    pub sunrise: DateTime<Utc>,
    /// Today's sunset instant
    pub sunset: DateTime<Utc>,
}

/// What a tick produced: an observation, or the failure that replaced it
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The fetch succeeded
    Observation(WeatherObservation),
    /// The fetch failed; the message is rendered on the error frame
    Failed {
        /// Human-readable failure description
        message: String,
    },
}

impl TickOutcome {
    /// The observation, if the tick succeeded
    #[must_use]
    pub const fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            Self::Observation(obs) => Some(obs),
            Self::Failed { .. } => None,
        }
    }
}

/// Everything one tick hands to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TickContext {
    /// Observation or failure for this tick
    pub outcome: TickOutcome,
    /// Whether the tick falls outside the sunrise-sunset interval
    pub is_night: bool,
    /// Tick time in the station's timezone, for the "updated at" line
    pub local_time: DateTime<Tz>,
}

impl TickContext {
    /// Build the context for one tick
    ///
    /// The night flag is derived from the observation's sunrise/sunset; a
    /// failed tick renders in the normal palette.
    #[must_use]
    pub fn new(outcome: TickOutcome, now: DateTime<Utc>, timezone: Tz) -> Self {
        let night = match &outcome {
            TickOutcome::Observation(obs) => is_night(now, obs.sunrise, obs.sunset),
            TickOutcome::Failed { .. } => false,
        };
        Self {
            outcome,
            is_night: night,
            local_time: now.with_timezone(&timezone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn observation(sunrise_h: u32, sunset_h: u32) -> WeatherObservation {
        WeatherObservation {
            temperature: 72.4,
            apparent_temperature: 70.1,
            wind_speed: 5.0,
            wind_gusts: 10.0,
            wind_direction: 180,
            humidity: 40,
            weather_code: 0,
            sunrise: Utc.with_ymd_and_hms(2025, 6, 21, sunrise_h, 0, 0).single().expect("valid"),
            sunset: Utc.with_ymd_and_hms(2025, 6, 21, sunset_h, 0, 0).single().expect("valid"),
        }
    }

    #[test]
    fn context_classifies_daytime_tick() {
        let now = Utc.with_ymd_and_hms(2025, 6, 21, 12, 0, 0).single().expect("valid");
        let ctx = TickContext::new(
            TickOutcome::Observation(observation(5, 21)),
            now,
            chrono_tz::America::Chicago,
        );
        assert!(!ctx.is_night);
    }

    #[test]
    fn context_classifies_night_tick() {
        let now = Utc.with_ymd_and_hms(2025, 6, 21, 23, 0, 0).single().expect("valid");
        let ctx = TickContext::new(
            TickOutcome::Observation(observation(5, 21)),
            now,
            chrono_tz::America::Chicago,
        );
        assert!(ctx.is_night);
    }

    #[test]
    fn failed_tick_renders_in_normal_palette() {
        let now = Utc.with_ymd_and_hms(2025, 6, 21, 23, 0, 0).single().expect("valid");
        let ctx = TickContext::new(
            TickOutcome::Failed {
                message: "connection refused".to_string(),
            },
            now,
            chrono_tz::UTC,
        );
        assert!(!ctx.is_night);
        assert!(ctx.outcome.observation().is_none());
    }

    #[test]
    fn local_time_uses_station_timezone() {
        let now = Utc.with_ymd_and_hms(2025, 6, 21, 18, 30, 0).single().expect("valid");
        let ctx = TickContext::new(
            TickOutcome::Observation(observation(5, 21)),
            now,
            chrono_tz::America::Chicago,
        );
        // Chicago is UTC-5 in June
        assert_eq!(ctx.local_time.format("%H:%M").to_string(), "13:30");
    }
}
