//! Host key block discovery and key line validation.
//!
//! Pure functions only: no I/O, no shared state.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ParseError;
use crate::types::HostKey;

/// Opening marker cloud-init prints before the host keys.
pub const BEGIN_MARKER: &str = "-----BEGIN SSH HOST KEY KEYS-----";
/// Closing marker cloud-init prints after the host keys.
pub const END_MARKER: &str = "-----END SSH HOST KEY KEYS-----";

/// Line terminator expected inside key blocks.
const CRLF: &str = "\r\n";

/// Matches one block; the body stops at the first END marker after a BEGIN.
static KEY_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?s){}\r\n(.*?)\r\n{}",
        regex::escape(BEGIN_MARKER),
        regex::escape(END_MARKER)
    );
    // Safety: built from constant markers, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(&pattern).expect("valid regex")
});

/// Returns the body of every host key block in `text`, in input order.
///
/// Bodies exclude the CRLF that follows the BEGIN marker and the CRLF that
/// precedes the END marker.
pub fn key_blocks(text: &str) -> impl Iterator<Item = &str> {
    KEY_BLOCK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|body| body.as_str())
}

/// Extracts and validates every host key in `text`.
///
/// Keys are returned in block order, then line order within a block.
/// Duplicates are kept. Blank lines inside a block are skipped.
///
/// # Errors
///
/// * [`ParseError::NoHostKeyBlock`] if `text` contains no key block.
/// * [`ParseError::InvalidFormat`] for the first malformed key line; no
///   keys are returned in that case.
pub fn parse_host_keys(text: &str) -> Result<Vec<HostKey>, ParseError> {
    let mut found_block = false;
    let mut keys = Vec::new();

    for (index, body) in key_blocks(text).enumerate() {
        found_block = true;
        let before = keys.len();
        for line in body.split(CRLF) {
            if let Some(key) = HostKey::from_line(line)? {
                keys.push(key);
            }
        }
        tracing::debug!(block = index, keys = keys.len() - before, "parsed host key block");
    }

    if !found_block {
        return Err(ParseError::NoHostKeyBlock);
    }
    Ok(keys)
}

/// Extracts host keys from cloud-init console output as normalized
/// `<algorithm> <base64-material>` strings.
///
/// # Errors
///
/// Same as [`parse_host_keys`].
pub fn parse(text: &str) -> Result<Vec<String>, ParseError> {
    Ok(parse_host_keys(text)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
