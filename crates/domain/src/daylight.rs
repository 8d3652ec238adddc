//! Day/night classification from sunrise and sunset instants

use chrono::{DateTime, Utc};

/// Classify an instant as night-time
///
/// Daytime is the open interval between sunrise and sunset; an instant equal
/// to either boundary counts as night. All three values are instants, so the
/// comparison is timezone-independent.
#[must_use]
pub fn is_night(now: DateTime<Utc>, sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> bool {
    !(sunrise < now && now < sunset)
}
