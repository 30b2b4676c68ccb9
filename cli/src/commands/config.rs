//! `hostkeys config`: show and set configuration values.

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;
use crate::output::json;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key (host, known_hosts)
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or the
/// key/value is invalid.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Set { key, value } => set_config(app, &key, &value),
    }
}

fn show_config(app: &AppContext) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let path = app.config_store.path()?;

    if app.is_json() {
        json::print(&serde_json::json!({
            "host": config.host,
            "known_hosts": config.known_hosts.as_ref().map(|p| p.display().to_string()),
            "path": path.display().to_string(),
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    app.output.header("Configuration");
    app.output
        .kv("host:", config.host.as_deref().unwrap_or("(not set)"));
    let known_hosts = config.known_hosts.as_ref().map_or_else(
        || "~/.hostkeys/known_hosts (default)".to_string(),
        |p| p.display().to_string(),
    );
    app.output.kv("known_hosts:", &known_hosts);
    app.output.kv("file:", &path.display().to_string());
    Ok(ExitCode::SUCCESS)
}

fn set_config(app: &AppContext, key: &str, value: &str) -> Result<ExitCode> {
    config_service::set_value(&app.config_store, key, value)?;

    if app.is_json() {
        json::print(&serde_json::json!({ "key": key, "value": value }))?;
    } else {
        app.output.success(&format!("Set {key} = {value}"));
    }
    Ok(ExitCode::SUCCESS)
}
