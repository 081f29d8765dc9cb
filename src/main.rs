//! Axocheck: pre-flight sanity checks for Axolotl training configs.
//!
//! This is the main entry point for the `axocheck` CLI. It parses arguments,
//! runs the checks, and maps the outcome to an exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_tracing(cli.verbose);

    match commands::run(&cli) {
        Ok(true) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(false) => ExitCode::from(exit_codes::VALIDATION_FAILURE as u8),
        Err(err) => {
            // The report could not be written, so say why on stderr.
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
