//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber with an env-derived filter.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Calling this more than
/// once is harmless; later calls leave the existing subscriber in place.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}
