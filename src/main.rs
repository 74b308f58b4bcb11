//! Prunify: prune extraneous packages from an installed node_modules tree.
//!
//! This is the main entry point for the `prunify` CLI. It parses arguments,
//! runs the prune command, and maps errors to exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod package_json;
pub mod patterns;
pub mod resolver;
pub mod size;
pub mod walker;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::cmd_prune(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
