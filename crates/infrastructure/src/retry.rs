//! Generic retry logic with exponential backoff
//!
//! Wraps fallible async operations in a configurable retry loop. Delays
//! double between attempts and can optionally carry jitter; jitter is off
//! by default so refresh cadence stays deterministic.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::retry::{RetryConfig, with_retry};
//!
//! let config = RetryConfig::default();
//! let result = with_retry(&config, || async {
//!     client.fetch_observation(lat, lon).await
//! }).await;
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior with exponential backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Delay before the first retry in milliseconds (default: 200ms)
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Maximum delay between retries in milliseconds (default: 10000ms = 10s)
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Total attempts including the first one (default: 5)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Whether to add jitter to the delays (default: false)
    #[serde(default)]
    pub jitter_enabled: bool,

    /// Maximum jitter factor (0.0 to 1.0, default: 0.1 = 10%)
    #[serde(default = "default_jitter_factor")]
    pub jitter_factor: f64,
}

const fn default_initial_delay() -> u64 {
    200
}

const fn default_max_delay() -> u64 {
    10_000
}

const fn default_multiplier() -> f64 {
    2.0
}

const fn default_max_attempts() -> u32 {
    5
}

const fn default_jitter_factor() -> f64 {
    0.1
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
            multiplier: default_multiplier(),
            max_attempts: default_max_attempts(),
            jitter_enabled: false,
            jitter_factor: default_jitter_factor(),
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with custom parameters
    #[must_use]
    pub const fn new(
        initial_delay_ms: u64,
        max_delay_ms: u64,
        multiplier: f64,
        max_attempts: u32,
    ) -> Self {
        Self {
            initial_delay_ms,
            max_delay_ms,
            multiplier,
            max_attempts,
            jitter_enabled: false,
            jitter_factor: 0.1,
        }
    }

    /// Enable jitter on the computed delays
    #[must_use]
    pub const fn with_jitter(mut self) -> Self {
        self.jitter_enabled = true;
        self
    }

    /// Calculate the delay after a given failed attempt (0-indexed)
    ///
    /// Uses exponential backoff: delay = initial_delay * multiplier^attempt,
    /// capped at `max_delay_ms`.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_delay = (self.initial_delay_ms as f64) * self.multiplier.powi(attempt as i32);
        let capped_delay = base_delay.min(self.max_delay_ms as f64);

        let final_delay = if self.jitter_enabled {
            let jitter_range = capped_delay * self.jitter_factor;
            let jitter = rand::rng().random_range(-jitter_range..=jitter_range);
            (capped_delay + jitter).max(0.0)
        } else {
            capped_delay
        };

        Duration::from_millis(final_delay as u64)
    }
}

/// Trait for errors that can be checked for retryability
pub trait Retryable {
    /// Returns true if this error is retryable
    fn is_retryable(&self) -> bool;
}

impl Retryable for integration_weather::FetchError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

/// Retry result containing either success or the last error
#[derive(Debug)]
pub struct RetryResult<T, E> {
    /// The result of the operation
    pub result: Result<T, E>,
    /// Number of attempts made (1 = no retries, 2 = one retry, etc.)
    pub attempts: u32,
    /// Total time spent including retries
    pub total_duration: Duration,
}

impl<T, E> RetryResult<T, E> {
    /// Check if the operation succeeded
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Check if the operation failed
    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// Convert to standard Result, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Execute an async operation with retry logic
///
/// Retries the operation according to the configuration when it fails
/// with a retryable error.
#[allow(clippy::cast_possible_truncation)]
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> RetryResult<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    let start = std::time::Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        let result = operation().await;

        match result {
            Ok(value) => {
                if attempts > 1 {
                    debug!(
                        attempts = attempts,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "Operation succeeded after retries"
                    );
                }
                return RetryResult {
                    result: Ok(value),
                    attempts,
                    total_duration: start.elapsed(),
                };
            },
            Err(err) => {
                if !err.is_retryable() {
                    debug!(
                        attempts = attempts,
                        error = %err,
                        "Operation failed with non-retryable error"
                    );
                    return RetryResult {
                        result: Err(err),
                        attempts,
                        total_duration: start.elapsed(),
                    };
                }

                if attempts >= config.max_attempts {
                    warn!(
                        attempts = attempts,
                        max_attempts = config.max_attempts,
                        error = %err,
                        "Operation failed after all attempts"
                    );
                    return RetryResult {
                        result: Err(err),
                        attempts,
                        total_duration: start.elapsed(),
                    };
                }

                // 0-indexed failed attempt drives the delay
                let delay = config.delay_for_attempt(attempts - 1);
                warn!(
                    attempt = attempts,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(delay).await;
            },
        }
    }
}

/// Execute an async operation with retry logic, returning only the Result
///
/// This is a convenience wrapper around `with_retry` that discards metadata.
pub async fn retry<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    with_retry(config, operation).await.into_result()
}
