//! Command implementation for axocheck.
//!
//! Runs the checks for the config named on the command line and renders the
//! outcome to stdout. Load failures are part of the rendered report; only a
//! failure to write the report is returned as an error.

mod display;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::error::{CheckError, Result};
use crate::validate::validate;
use std::io::{self, Write};
use tracing::debug;

pub use display::*;

/// Execute a check run. Returns whether the config passed.
pub fn run(cli: &Cli) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(cli, &mut out)
}

/// Execute a check run, writing the report to `out`.
pub fn run_with_writer<W: Write>(cli: &Cli, out: &mut W) -> Result<bool> {
    let outcome = validate(&cli.config);
    if let Err(err) = &outcome {
        debug!(error = %err, "config failed to load");
    }

    write_text(out, &outcome).map_err(CheckError::Output)?;
    out.flush().map_err(CheckError::Output)?;

    Ok(outcome_passed(&outcome))
}
