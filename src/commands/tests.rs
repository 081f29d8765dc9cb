//! Tests for running checks and rendering reports.

use super::*;
use crate::test_support::write_config;
use crate::validate::validate;
use std::path::Path;
use tempfile::TempDir;

fn cli_for(config: &Path) -> Cli {
    Cli {
        config: config.to_path_buf(),
        verbose: 0,
    }
}

fn run_to_string(cli: &Cli) -> (bool, String) {
    let mut out = Vec::new();
    let passed = run_with_writer(cli, &mut out).unwrap();
    (passed, String::from_utf8(out).unwrap())
}

#[test]
fn test_missing_file_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("phi4-axolotl_config_fixed.yml");

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(!passed);
    let expected = format!(
        "🔍 Validating Axolotl Config...\n\
         ==================================================\n\
         ❌ Config file not found: {}\n\
         \n\
         ❌ Config validation failed! Fix errors before training.\n",
        path.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn test_parse_error_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "base_model: [unclosed\n");

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(!passed);
    assert!(output.contains("❌ Failed to parse YAML: "));
    assert!(!output.contains("Config file loaded"));
}

#[test]
fn test_invalid_utf8_is_reported_as_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    std::fs::write(&path, b"base_model: \xff\xfe\n").unwrap();

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(!passed);
    assert!(output.contains("❌ Failed to parse YAML: "));
    assert!(!output.contains("Failed to read config file"));
}

#[test]
fn test_whole_float_keeps_decimal_point() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "learning_rate: 1.0\nwarmup_steps: 100\n");

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(passed);
    assert!(output.contains("   Learning Rate: 1.0\n"));
    assert!(output.contains("   Warmup Steps: 100\n"));
}

#[test]
fn test_conflict_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        "eval_steps: 50\nevals_per_epoch: 4\ndatasets:\n  - path: /missing/data.jsonl\n",
    );

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(!passed);
    let expected = format!(
        "🔍 Validating Axolotl Config...\n\
         ==================================================\n\
         ✅ Config file loaded: {}\n\
         ❌ Config validation failed:\n   \
         - eval_steps and evals_per_epoch are mutually exclusive\n   \
         - Dataset path does not exist: /missing/data.jsonl\n\
         \n\
         ❌ Config validation failed! Fix errors before training.\n",
        path.display()
    );
    assert_eq!(output, expected);
    assert!(!output.contains("Key Settings"));
}

#[test]
fn test_passing_report() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("train.jsonl");
    std::fs::write(&dataset, "{}\n").unwrap();
    let path = write_config(
        temp_dir.path(),
        &format!(
            "base_model: microsoft/phi-4\nsequence_len: 4096\nlearning_rate: 0.0002\ndatasets:\n  - path: {}\n",
            dataset.display()
        ),
    );

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(passed);
    let expected = format!(
        "🔍 Validating Axolotl Config...\n\
         ==================================================\n\
         ✅ Config file loaded: {config}\n\
         ✅ Dataset path exists: {dataset}\n\
         ✅ No conflicts found!\n\
         \n\
         📊 Key Settings:\n   \
         Model: microsoft/phi-4\n   \
         Dataset: {dataset}\n   \
         Sequence Length: 4096\n   \
         Micro Batch Size: Not specified\n   \
         Gradient Accumulation: Not specified\n   \
         Learning Rate: 0.0002\n   \
         Warmup Steps: Not specified\n   \
         Eval Steps: Not specified\n\
         \n\
         🎉 Config validation passed! Ready for training.\n",
        config = path.display(),
        dataset = dataset.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn test_no_dataset_line_without_datasets() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "base_model: microsoft/phi-4\n");

    let (passed, output) = run_to_string(&cli_for(&path));

    assert!(passed);
    assert!(!output.contains("Dataset path exists"));
    assert!(output.contains("   Dataset: Not specified\n"));
}

#[test]
fn test_outcome_passed() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_config(temp_dir.path(), "eval_steps: 10\n");
    assert!(outcome_passed(&validate(&good)));

    let missing = temp_dir.path().join("missing.yml");
    assert!(!outcome_passed(&validate(&missing)));
}

#[test]
fn test_write_errors_surface() {
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "eval_steps: 10\n");

    let err = run_with_writer(&cli_for(&path), &mut FailingWriter).unwrap_err();
    assert!(matches!(err, CheckError::Output(_)));
}
