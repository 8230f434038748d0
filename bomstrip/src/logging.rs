//! Diagnostic tracing for the scanner.
//!
//! The scan report itself is written to stdout by [`crate::scan`] and is not
//! affected by `RUST_LOG`. Tracing carries per-file failures, pruned
//! directories and the final counts, on stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset, so per-file
/// failures are visible without configuration.
///
/// # Example
/// ```bash
/// RUST_LOG=bomstrip=debug bomstrip
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
