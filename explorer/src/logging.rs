//! Development-time tracing for debugging solves.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`; the solve and
//! run summaries printed to stdout are the product output and are
//! unaffected.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output: stderr, compact
/// format.
///
/// # Example
/// ```bash
/// RUST_LOG=explorer=debug cargo run -p explorer -- --width 21 --height 21
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
