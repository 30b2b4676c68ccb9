//! File replacement that never leaves a half-written file behind.

use anyhow::{Context, Result};
use std::io::Write as _;
use std::path::Path;

/// Replaces `path` with `content`.
///
/// The content goes to a temporary file in the same directory, which is
/// given `mode` (Unix) and then renamed over `path`. Readers see either the
/// old file or the new one. On any failure `path` is left as it was and the
/// temporary file is removed.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written,
/// synced, or renamed into place.
pub fn write_atomic(path: &Path, content: &str, mode: u32) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("write {}", tmp.path().display()))?;
    set_mode(tmp.path(), mode)?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Sets Unix permission bits on `path`.
///
/// # Errors
///
/// Returns an error if the permissions cannot be changed.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .with_context(|| format!("set permissions on {}", path.display()))
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
