//! `hostkeys fingerprint`: SHA256 fingerprints of extracted host keys.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::commands::InputArgs;
use crate::domain::fingerprint::sha256_fingerprint;
use crate::output::{self, json};

/// Arguments for the fingerprint command.
#[derive(Args)]
pub struct FingerprintArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Serialize)]
struct FingerprintOutput {
    algorithm: String,
    fingerprint: String,
}

/// Run the fingerprint command.
///
/// # Errors
///
/// Returns an error if extraction fails or any key's material is not base64.
pub fn run(app: &AppContext, args: &FingerprintArgs) -> Result<ExitCode> {
    let rows = args
        .input
        .host_keys()?
        .into_iter()
        .map(|key| -> Result<FingerprintOutput> {
            Ok(FingerprintOutput {
                fingerprint: sha256_fingerprint(&key)?,
                algorithm: key.algorithm,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if app.is_json() {
        json::print(&rows)?;
    } else {
        output::print_lines(
            rows.iter().map(|row| format!("{} {}", row.fingerprint, row.algorithm)),
        )?;
    }
    Ok(ExitCode::SUCCESS)
}
