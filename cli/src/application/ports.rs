//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::HostkeysConfig;

/// Persistent storage for `HostkeysConfig`.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when none is stored.
    fn load(&self) -> Result<HostkeysConfig>;
    /// Persist the configuration.
    fn save(&self, config: &HostkeysConfig) -> Result<()>;
    /// Location of the backing file.
    fn path(&self) -> Result<PathBuf>;
}

/// Read/write access to a single `known_hosts` file.
pub trait KnownHostsStore {
    /// Current file contents; an absent file reads as empty.
    fn read(&self) -> Result<String>;
    /// Replace the file contents.
    fn write(&self, content: &str) -> Result<()>;
    /// Location of the file, for reporting.
    fn path(&self) -> &Path;
}
