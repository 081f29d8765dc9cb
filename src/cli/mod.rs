//! CLI argument parsing for axocheck.
//!
//! Uses clap derive macros for declarative argument definitions. The actual
//! run logic lives in the `commands` module.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Axocheck: pre-flight sanity checks for Axolotl training configs.
///
/// Loads the config, flags settings that must not be combined, checks that
/// the first dataset path exists, and prints the key settings. Exits 0 when
/// the config passes and 1 when it does not.
#[derive(Parser, Debug)]
#[command(name = "axocheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Axolotl YAML config.
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Increase log verbosity on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
