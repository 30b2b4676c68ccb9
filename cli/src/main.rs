//! hostkeys: extract and pin SSH host keys from cloud-init console output

use std::process::ExitCode;

use clap::Parser;

use hostkeys_cli::cli::Cli;
use hostkeys_cli::{logging, output};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json = cli.json;

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            if json {
                if let Ok(obj) = output::json::format_error(&message, output::json::error_code(&e)) {
                    println!("{obj}");
                    return ExitCode::FAILURE;
                }
            }
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
