//! `hostkeys extract`: print the host keys found in console output.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::commands::InputArgs;
use crate::domain::known_hosts::validate_host_alias;
use crate::output::{self, json};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print known_hosts lines for this host alias
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Serialize)]
struct ExtractOutput<'a> {
    host: Option<&'a str>,
    keys: Vec<KeyOutput<'a>>,
}

#[derive(Serialize)]
struct KeyOutput<'a> {
    algorithm: &'a str,
    material: &'a str,
    key: String,
}

/// Run the extract command.
///
/// # Errors
///
/// Returns an error if the host alias is invalid, the input cannot be read,
/// or the console output holds no valid key block.
pub fn run(app: &AppContext, args: &ExtractArgs) -> Result<ExitCode> {
    let host = args.host.as_deref();
    if let Some(host) = host {
        validate_host_alias(host)?;
    }

    let keys = args.input.host_keys()?;
    if keys.is_empty() {
        app.output.warn("Host key block contained no keys");
    }

    if app.is_json() {
        json::print(&ExtractOutput {
            host,
            keys: keys
                .iter()
                .map(|k| KeyOutput {
                    algorithm: &k.algorithm,
                    material: &k.material,
                    key: k.to_string(),
                })
                .collect(),
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    output::print_lines(keys.iter().map(|key| match host {
        Some(host) => key.known_hosts_line(host),
        None => key.to_string(),
    }))?;
    Ok(ExitCode::SUCCESS)
}
