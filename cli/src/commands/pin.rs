//! `hostkeys pin`: pin host keys into a `known_hosts` file.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::ports::KnownHostsStore;
use crate::application::services::{config_service, pin_service};
use crate::commands::InputArgs;
use crate::domain::error::PinError;
use crate::infra::KnownHostsManager;
use crate::output::json;

/// Arguments for the pin command.
#[derive(Args)]
pub struct PinArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Host alias to pin the keys under (default: configured `host`)
    #[arg(long)]
    pub host: Option<String>,

    /// known_hosts file to update (default: configured `known_hosts`,
    /// then ~/.hostkeys/known_hosts)
    #[arg(long, value_name = "PATH")]
    pub known_hosts: Option<PathBuf>,
}

/// Run the pin command.
///
/// The host alias is resolved before any input is read, and the file is
/// written only after every key line validates.
///
/// # Errors
///
/// Returns an error if no usable host alias is available, the input holds no
/// valid keys, or the `known_hosts` file cannot be written.
pub fn run(app: &AppContext, args: &PinArgs) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let host = pin_service::resolve_host(args.host.as_deref(), config.host.as_deref())?;

    let keys = args.input.host_keys()?;
    if keys.is_empty() {
        return Err(PinError::NoKeys(host).into());
    }

    let store = KnownHostsManager::resolve(args.known_hosts.clone().or(config.known_hosts))?;
    let pinned = pin_service::pin(&store, &host, &keys)?;

    if app.is_json() {
        json::print(&serde_json::json!({
            "host": host,
            "path": store.path().display().to_string(),
            "pinned": pinned,
        }))?;
    } else {
        app.output.success(&format!(
            "Pinned {pinned} host key(s) for {host} in {}",
            store.path().display()
        ));
    }
    Ok(ExitCode::SUCCESS)
}
