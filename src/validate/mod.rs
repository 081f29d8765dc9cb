//! Sanity checks for a training config.
//!
//! # Checks, in report order
//!
//! - `eval_steps` and `evals_per_epoch` both set
//! - `warmup_steps` and `warmup_ratio` both set
//! - `save_steps` and `saves_per_epoch` both set
//! - First dataset `path` given but missing on disk
//!
//! Every check runs; conflicts are collected rather than returned on the
//! first hit. Nothing here prints: the caller renders the report.

mod checks;


use crate::config::TrainingConfig;
use crate::config::types::{Setting, display_or_placeholder};
use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use checks::*;

/// A detected rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// Two settings that must not both be set are both set.
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },
    /// The first dataset's path does not exist.
    MissingDataset { path: String },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::MutuallyExclusive { first, second } => {
                write!(f, "{} and {} are mutually exclusive", first, second)
            }
            Conflict::MissingDataset { path } => {
                write!(f, "Dataset path does not exist: {}", path)
            }
        }
    }
}

/// Outcome of probing the first dataset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCheck {
    pub path: String,
    pub exists: bool,
}

/// The settings echoed back to the user when a config passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeySettings {
    pub base_model: Option<Setting>,
    pub dataset: Option<String>,
    pub sequence_len: Option<Setting>,
    pub micro_batch_size: Option<Setting>,
    pub gradient_accumulation_steps: Option<Setting>,
    pub learning_rate: Option<Setting>,
    pub warmup_steps: Option<Setting>,
    pub eval_steps: Option<Setting>,
}

impl KeySettings {
    /// Pull the displayed settings out of a parsed config.
    pub fn from_config(config: &TrainingConfig) -> Self {
        Self {
            base_model: config.base_model.clone(),
            dataset: config.first_dataset_path().map(str::to_string),
            sequence_len: config.sequence_len.clone(),
            micro_batch_size: config.micro_batch_size.clone(),
            gradient_accumulation_steps: config.gradient_accumulation_steps.clone(),
            learning_rate: config.learning_rate.clone(),
            warmup_steps: config.warmup_steps.clone(),
            eval_steps: config.eval_steps.clone(),
        }
    }

    /// Label/value pairs in display order, with placeholders for absent values.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let dataset = match &self.dataset {
            Some(path) => path.clone(),
            None => crate::config::NOT_SPECIFIED.to_string(),
        };

        vec![
            ("Model", display_or_placeholder(self.base_model.as_ref())),
            ("Dataset", dataset),
            (
                "Sequence Length",
                display_or_placeholder(self.sequence_len.as_ref()),
            ),
            (
                "Micro Batch Size",
                display_or_placeholder(self.micro_batch_size.as_ref()),
            ),
            (
                "Gradient Accumulation",
                display_or_placeholder(self.gradient_accumulation_steps.as_ref()),
            ),
            (
                "Learning Rate",
                display_or_placeholder(self.learning_rate.as_ref()),
            ),
            (
                "Warmup Steps",
                display_or_placeholder(self.warmup_steps.as_ref()),
            ),
            ("Eval Steps", display_or_placeholder(self.eval_steps.as_ref())),
        ]
    }
}

/// Result of checking one config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Path the config was loaded from.
    pub config_path: PathBuf,
    /// Conflicts in check order. Empty means the config passed.
    pub conflicts: Vec<Conflict>,
    /// Dataset existence check, if the config names a dataset path.
    pub dataset: Option<DatasetCheck>,
    /// Settings to echo back.
    pub settings: KeySettings,
}

impl ValidationReport {
    pub fn new(config_path: &Path, settings: KeySettings) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            conflicts: Vec::new(),
            dataset: None,
            settings,
        }
    }

    pub fn passed(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Load the config at `path` and run every check against it.
///
/// Load failures (missing file, unreadable file, bad YAML) are returned as
/// errors; rule violations are returned inside the report.
pub fn validate(path: &Path) -> Result<ValidationReport> {
    debug!(path = %path.display(), "loading config");
    let config = TrainingConfig::load(path)?;
    info!(path = %path.display(), "config file loaded");

    Ok(check_config(&config, path))
}

/// Run every check against an already-parsed config.
pub fn check_config(config: &TrainingConfig, config_path: &Path) -> ValidationReport {
    let mut report = ValidationReport::new(config_path, KeySettings::from_config(config));

    check_eval_schedule(config, &mut report);
    check_warmup_schedule(config, &mut report);
    check_save_schedule(config, &mut report);
    check_dataset_path(config, &mut report);

    info!(
        conflicts = report.conflicts.len(),
        passed = report.passed(),
        "checks complete"
    );
    report
}
