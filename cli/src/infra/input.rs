//! Reading raw console output from a file or stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads console output from `path`, or from stdin when `path` is `None`
/// or `-`.
///
/// Bytes are decoded as UTF-8 lossily: console captures often carry stray
/// control bytes outside the key block.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_console_output(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };
    tracing::debug!(bytes = bytes.len(), "read console output");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
