//! Extraction of SSH host public keys from cloud-init console output.
//!
//! Cloud-init prints the instance's host keys between
//! `-----BEGIN SSH HOST KEY KEYS-----` and `-----END SSH HOST KEY KEYS-----`
//! markers. [`parse`] finds every such block, validates each key line and
//! returns the keys in `<algorithm> <base64-material>` form with the comment
//! field removed.

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::{BEGIN_MARKER, END_MARKER, key_blocks, parse, parse_host_keys};
pub use types::HostKey;
