//! Command implementations

pub mod config;
pub mod extract;
pub mod fingerprint;
pub mod pin;

use anyhow::Result;
use clap::Args;
use hostkeys_common::HostKey;
use std::path::PathBuf;

use crate::infra::read_console_output;

/// Console output source shared by the extracting commands.
#[derive(Args)]
pub struct InputArgs {
    /// Console output file; reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Reads the console output and extracts its host keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or holds no valid key block.
    pub fn host_keys(&self) -> Result<Vec<HostKey>> {
        let text = read_console_output(self.input.as_deref())?;
        Ok(hostkeys_common::parse_host_keys(&text)?)
    }
}
