//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and pretty-printing for command results.

use anyhow::{Context, Result};
use serde::Serialize;

/// Code reported for failures that carry no more specific code.
pub const GENERIC_ERROR_CODE: &str = "ERROR";

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Picks the machine code for `err`: the extractor's own code when the
/// failure came from parsing, otherwise [`GENERIC_ERROR_CODE`].
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<hostkeys_common::ParseError>())
        .map_or(GENERIC_ERROR_CODE, hostkeys_common::ParseError::code)
}

/// Pretty-print `value` as JSON to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails or stdout cannot be written.
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    super::print_lines([out])
}
