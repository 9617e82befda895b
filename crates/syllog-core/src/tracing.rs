//! Tracing subscriber setup.
//!
//! Library code only emits events; binaries and test harnesses opt in to a
//! subscriber by calling [`init_tracing`].

use tracing_subscriber::EnvFilter;

/// Env var consulted first for the filter directive.
pub const LOG_ENV_VAR: &str = "SYLLOG_LOG";

/// Install a global `fmt` subscriber.
///
/// Filter precedence: `SYLLOG_LOG`, then `RUST_LOG`, then `info`. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
