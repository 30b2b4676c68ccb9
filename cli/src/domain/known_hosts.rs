//! Pure `known_hosts` rendering and merging.

use hostkeys_common::HostKey;

use crate::domain::error::PinError;

/// Validates a host alias used as the first field of a `known_hosts` entry.
///
/// # Errors
///
/// Returns [`PinError::InvalidHost`] if `host` is empty or contains whitespace.
pub fn validate_host_alias(host: &str) -> Result<(), PinError> {
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(PinError::InvalidHost(host.to_string()));
    }
    Ok(())
}

/// Renders one `known_hosts` line per key.
#[must_use]
pub fn render_entries(host: &str, keys: &[HostKey]) -> Vec<String> {
    keys.iter().map(|key| key.known_hosts_line(host)).collect()
}

/// Returns the host field of a plain `known_hosts` entry.
///
/// Blank lines, comments, and marker lines (`@cert-authority`, `@revoked`)
/// have no host field here and are never replaced.
fn entry_host(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') || line.starts_with('@') {
        return None;
    }
    line.split_whitespace().next()
}

/// Replaces every entry for `host` in `existing` with entries for `keys`.
///
/// Lines for other hosts, comments, and blank lines keep their order; the
/// new entries are appended. The result ends with a newline unless empty.
#[must_use]
pub fn merge_entries(existing: &str, host: &str, keys: &[HostKey]) -> String {
    let mut lines: Vec<String> = existing
        .lines()
        .filter(|line| entry_host(line) != Some(host))
        .map(str::to_string)
        .collect();
    lines.extend(render_entries(host, keys));

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
