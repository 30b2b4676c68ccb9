use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

/// An SSH host public key with its comment field removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostKey {
    /// Key type, e.g. `ssh-ed25519`. Not checked against a known set.
    pub algorithm: String,
    /// Base64 key material, kept as text and never decoded here.
    pub material: String,
}

impl HostKey {
    /// Parses a single key line from a host key block.
    ///
    /// The line is split on the first two spaces into at most three fields:
    /// algorithm, material and comment. Everything after the second space
    /// belongs to the comment and is dropped. A line that is empty after
    /// trimming yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFormat`] with the trimmed line when the
    /// algorithm or the material field is missing.
    pub fn from_line(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut fields = line.splitn(3, ' ');
        let algorithm = fields.next().unwrap_or_default();
        let material = fields.next().unwrap_or_default();
        if algorithm.is_empty() || material.is_empty() {
            return Err(ParseError::InvalidFormat(line.to_string()));
        }

        Ok(Some(Self {
            algorithm: algorithm.to_string(),
            material: material.to_string(),
        }))
    }

    /// Renders the key as a `known_hosts` entry for `host`.
    #[must_use]
    pub fn known_hosts_line(&self, host: &str) -> String {
        format!("{host} {self}")
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.material)
    }
}
