//! Domain types and validators for hostkeys configuration.
//!
//! Pure functions only: no I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::ConfigError;
use crate::domain::known_hosts::validate_host_alias;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["host", "known_hosts"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.hostkeys/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HostkeysConfig {
    /// Default host alias used by `hostkeys pin` when `--host` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// `known_hosts` file used by `hostkeys pin` when `--known-hosts` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_hosts: Option<PathBuf>,
}

impl HostkeysConfig {
    /// Applies a validated `key = value` assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "host" => self.host = Some(value.to_string()),
            "known_hosts" => self.known_hosts = Some(PathBuf::from(value)),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |reason| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };
    match key {
        "host" if validate_host_alias(value).is_err() => {
            Err(invalid("must be non-empty with no whitespace").into())
        }
        "known_hosts" if value.trim().is_empty() => Err(invalid("path must not be empty").into()),
        _ => Ok(()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
