//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod known_hosts;

pub use config::{HostkeysConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, FingerprintError, PinError};
pub use fingerprint::sha256_fingerprint;
pub use known_hosts::{merge_entries, render_entries, validate_host_alias};
