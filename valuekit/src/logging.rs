//! Development-time tracing for the `valuekit` binary.
//!
//! Core primitives emit `debug!`/`trace!` events (lazy loads, clamped writes).
//! Nothing is printed unless a subscriber is installed; the CLI installs one
//! via [`init`]. Command output on stdout is unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=valuekit=trace valuekit priority 10 -2 3
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
