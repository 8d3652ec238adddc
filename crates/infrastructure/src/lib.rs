//! Infrastructure layer - configuration, logging and resilience
//!
//! Holds the pieces the rest of the station leans on but that are not
//! domain logic: config loading, the tracing subscriber and the retry loop
//! around flaky network calls.

pub mod config;
pub mod retry;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, LocationConfig};
pub use retry::{RetryConfig, RetryResult, Retryable, retry, with_retry};
pub use telemetry::init_tracing;
