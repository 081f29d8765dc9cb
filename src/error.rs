//! Error types for the axocheck CLI.
//!
//! Uses thiserror for derive macros. Messages are printed verbatim in the
//! report, so they are written for the person fixing the config.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for axocheck operations.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Nothing exists at the config path.
    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The config path exists but could not be read (permissions, a directory, ...).
    #[error("Failed to read config file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not YAML, or not a mapping of the expected shape.
    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Writing the report failed (e.g. stdout closed).
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

impl CheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::MissingFile(_) => exit_codes::VALIDATION_FAILURE,
            CheckError::Unreadable { .. } => exit_codes::VALIDATION_FAILURE,
            CheckError::Parse(_) => exit_codes::VALIDATION_FAILURE,
            CheckError::Output(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for axocheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
