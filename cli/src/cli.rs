//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Extract and pin SSH host keys from cloud-init console output
#[derive(Parser)]
#[command(
    name = "hostkeys",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also set by a non-empty `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print host keys found in console output
    Extract(commands::extract::ExtractArgs),

    /// Pin host keys from console output into a known_hosts file
    Pin(commands::pin::PinArgs),

    /// Print SHA256 fingerprints of host keys in console output
    Fingerprint(commands::fingerprint::FingerprintArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Extract(args) => commands::extract::run(&app, &args),
            Command::Pin(args) => commands::pin::run(&app, &args),
            Command::Fingerprint(args) => commands::fingerprint::run(&app, &args),
            Command::Config(cmd) => commands::config::run(&app, cmd),
        }
    }
}
