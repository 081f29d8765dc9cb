//! TrainingConfig struct definition.

use super::types::Setting;
use serde::Deserialize;
use serde_yaml::Value;

/// The subset of an Axolotl training config that axocheck reads.
///
/// Unknown keys are ignored, so any real Axolotl config deserializes as long
/// as it is a mapping. A `null` value is the same as leaving the key out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    // =========================================================================
    // Model
    // =========================================================================
    /// Hugging Face id or local path of the model being fine-tuned.
    pub base_model: Option<Setting>,

    // =========================================================================
    // Data
    // =========================================================================
    /// Training data sources, kept as written. Only the first entry's `path`
    /// is read, so the shape of the rest does not matter.
    pub datasets: Option<Value>,

    /// Maximum tokens per packed sample.
    pub sequence_len: Option<Setting>,

    // =========================================================================
    // Batching and optimizer
    // =========================================================================
    pub micro_batch_size: Option<Setting>,
    pub gradient_accumulation_steps: Option<Setting>,
    pub learning_rate: Option<Setting>,

    /// Mutually exclusive with `warmup_ratio`.
    pub warmup_steps: Option<Setting>,
    pub warmup_ratio: Option<Setting>,

    // =========================================================================
    // Evaluation and checkpointing
    // =========================================================================
    /// Mutually exclusive with `evals_per_epoch`.
    pub eval_steps: Option<Setting>,
    pub evals_per_epoch: Option<Setting>,

    /// Mutually exclusive with `saves_per_epoch`.
    pub save_steps: Option<Setting>,
    pub saves_per_epoch: Option<Setting>,
}

impl TrainingConfig {
    /// Path of the first dataset entry, if one is given as a non-empty string.
    ///
    /// Anything that is not a list whose first item is a mapping with a
    /// string `path` yields `None`.
    pub fn first_dataset_path(&self) -> Option<&str> {
        self.datasets
            .as_ref()
            .and_then(Value::as_sequence)
            .and_then(|entries| entries.first())
            .and_then(|entry| entry.get("path"))
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
    }
}
