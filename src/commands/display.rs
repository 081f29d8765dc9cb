//! Rendering of validation results.

use crate::error::CheckError;
use crate::validate::ValidationReport;
use std::io::{self, Write};

/// Result of loading and checking one config.
pub type Outcome = Result<ValidationReport, CheckError>;

/// Whether an outcome counts as a pass.
pub fn outcome_passed(outcome: &Outcome) -> bool {
    outcome.as_ref().is_ok_and(ValidationReport::passed)
}

/// Write the human-readable report.
pub fn write_text<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "🔍 Validating Axolotl Config...")?;
    writeln!(out, "{}", "=".repeat(50))?;

    match outcome {
        Ok(report) => write_report(out, report)?,
        Err(err) => writeln!(out, "❌ {}", err)?,
    }

    writeln!(out)?;
    if outcome_passed(outcome) {
        writeln!(out, "🎉 Config validation passed! Ready for training.")
    } else {
        writeln!(out, "❌ Config validation failed! Fix errors before training.")
    }
}

fn write_report<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    writeln!(
        out,
        "✅ Config file loaded: {}",
        report.config_path.display()
    )?;

    if let Some(dataset) = report.dataset.as_ref().filter(|d| d.exists) {
        writeln!(out, "✅ Dataset path exists: {}", dataset.path)?;
    }

    if !report.passed() {
        writeln!(out, "❌ Config validation failed:")?;
        for conflict in &report.conflicts {
            writeln!(out, "   - {}", conflict)?;
        }
        return Ok(());
    }

    writeln!(out, "✅ No conflicts found!")?;
    writeln!(out)?;
    writeln!(out, "📊 Key Settings:")?;
    for (label, value) in report.settings.rows() {
        writeln!(out, "   {}: {}", label, value)?;
    }

    Ok(())
}
