//! Individual check functions.

use crate::config::TrainingConfig;
use crate::config::types::{Setting, is_set};
use std::path::Path;
use tracing::{debug, info};

use super::{Conflict, DatasetCheck, ValidationReport};

/// Record a conflict when both settings of an exclusive pair are set.
fn check_exclusive(
    report: &mut ValidationReport,
    (first, first_value): (&'static str, Option<&Setting>),
    (second, second_value): (&'static str, Option<&Setting>),
) {
    if is_set(first_value) && is_set(second_value) {
        info!(first, second, "mutually exclusive settings both set");
        report
            .conflicts
            .push(Conflict::MutuallyExclusive { first, second });
    }
}

/// Check that evaluation is scheduled by steps or per epoch, not both.
pub fn check_eval_schedule(config: &TrainingConfig, report: &mut ValidationReport) {
    check_exclusive(
        report,
        ("eval_steps", config.eval_steps.as_ref()),
        ("evals_per_epoch", config.evals_per_epoch.as_ref()),
    );
}

/// Check that warmup is given in steps or as a ratio, not both.
pub fn check_warmup_schedule(config: &TrainingConfig, report: &mut ValidationReport) {
    check_exclusive(
        report,
        ("warmup_steps", config.warmup_steps.as_ref()),
        ("warmup_ratio", config.warmup_ratio.as_ref()),
    );
}

/// Check that checkpoints are scheduled by steps or per epoch, not both.
pub fn check_save_schedule(config: &TrainingConfig, report: &mut ValidationReport) {
    check_exclusive(
        report,
        ("save_steps", config.save_steps.as_ref()),
        ("saves_per_epoch", config.saves_per_epoch.as_ref()),
    );
}

/// Check that the first dataset's path exists.
///
/// Relative paths resolve against the current directory, the same way the
/// trainer resolves them when launched from there.
pub fn check_dataset_path(config: &TrainingConfig, report: &mut ValidationReport) {
    let Some(path) = config.first_dataset_path() else {
        debug!("no dataset path to check");
        return;
    };

    let exists = Path::new(path).exists();
    debug!(path, exists, "checked dataset path");

    if !exists {
        report.conflicts.push(Conflict::MissingDataset {
            path: path.to_string(),
        });
    }

    report.dataset = Some(DatasetCheck {
        path: path.to_string(),
        exists,
    });
}
