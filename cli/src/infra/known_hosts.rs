//! `known_hosts` file access for host key pinning (`KnownHostsManager`).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::application::ports::KnownHostsStore;
use crate::infra::fs::{set_mode, write_atomic};

/// Manages a `known_hosts` file, by default `~/.hostkeys/known_hosts`.
pub struct KnownHostsManager {
    path: PathBuf,
}

impl KnownHostsManager {
    /// Creates a manager pointing at `~/.hostkeys/known_hosts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".hostkeys").join("known_hosts")))
    }

    /// Creates a manager pointing at an arbitrary path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `path` when given, otherwise the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is given and the home directory cannot be
    /// determined.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::with_path(path)),
            None => Self::new(),
        }
    }
}

impl KnownHostsStore for KnownHostsManager {
    fn read(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e).with_context(|| format!("read {}", self.path.display())),
        }
    }

    /// Replaces the file with `content`, creating parent dirs as needed.
    ///
    /// The old file stays intact until the new one is complete. Sets file
    /// permissions to 600 and parent directory to 700 on Unix.
    fn write(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
            set_mode(parent, 0o700)?;
        }
        write_atomic(&self.path, content, 0o600)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
