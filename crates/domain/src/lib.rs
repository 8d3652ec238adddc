//! Domain layer for the weather station
//!
//! Contains the per-tick data model, measurement units, the WMO
//! condition-code table and day/night classification. This layer has no I/O
//! dependencies and defines the ubiquitous language.

pub mod daylight;
pub mod icons;
pub mod observation;
pub mod units;

pub use daylight::is_night;
pub use icons::Icon;
pub use observation::{TickContext, TickOutcome, WeatherObservation};
pub use units::{TemperatureUnit, Units, WindUnit};
