//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: &'static str,
    },
}

// ── Pin errors ────────────────────────────────────────────────────────────────

/// Errors raised while pinning host keys into a `known_hosts` file.
#[derive(Debug, Error)]
pub enum PinError {
    #[error("No host alias given. Pass --host or run: hostkeys config set host <alias>")]
    MissingHost,

    #[error("Invalid host alias {0:?}: must be non-empty and contain no whitespace")]
    InvalidHost(String),

    #[error("Host key block contained no keys; refusing to pin an empty key set for {0}")]
    NoKeys(String),
}

// ── Fingerprint errors ────────────────────────────────────────────────────────

/// Errors raised while fingerprinting a host key.
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("cannot decode key material for {algorithm}: {source}")]
    InvalidMaterial {
        algorithm: String,
        #[source]
        source: base64::DecodeError,
    },
}
