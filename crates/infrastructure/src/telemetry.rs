//! Logging setup
//!
//! Structured logging via `tracing`, with the filter taken from `RUST_LOG`
//! when set and from the verbosity flag otherwise.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
