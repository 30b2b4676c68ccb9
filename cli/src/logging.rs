//! `tracing` subscriber setup.
//!
//! Diagnostics go to stderr so stdout stays clean for keys and JSON.

use tracing_subscriber::EnvFilter;

/// Level used when neither `--verbose` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Builds the filter: `--verbose` forces `debug`, otherwise `RUST_LOG`
/// applies, falling back to `warn`.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
