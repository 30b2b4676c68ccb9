//! Application service: pin extracted host keys into a `known_hosts` file.

use anyhow::Result;
use hostkeys_common::HostKey;

use crate::application::ports::KnownHostsStore;
use crate::domain::error::PinError;
use crate::domain::known_hosts::{merge_entries, validate_host_alias};

/// Picks the host alias: the explicit one if given, else the configured one.
///
/// # Errors
///
/// Returns [`PinError::MissingHost`] when neither is set, or
/// [`PinError::InvalidHost`] when the chosen alias is not usable.
pub fn resolve_host(explicit: Option<&str>, configured: Option<&str>) -> Result<String, PinError> {
    let host = explicit.or(configured).ok_or(PinError::MissingHost)?;
    validate_host_alias(host)?;
    Ok(host.to_string())
}

/// Replaces all entries for `host` in the store with `keys`.
///
/// Returns the number of entries written for `host`.
pub fn pin(store: &impl KnownHostsStore, host: &str, keys: &[HostKey]) -> Result<usize> {
    validate_host_alias(host)?;
    let existing = store.read()?;
    let merged = merge_entries(&existing, host, keys);
    store.write(&merged)?;
    tracing::debug!(host, keys = keys.len(), path = %store.path().display(), "pinned host keys");
    Ok(keys.len())
}
