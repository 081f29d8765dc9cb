//! Configuration model for Axolotl training configs.
//!
//! This module defines the `TrainingConfig` struct that represents the keys
//! axocheck inspects in an Axolotl YAML file. Parsing is forward-compatible
//! (unknown keys are ignored) and every recognized key is optional.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::TrainingConfig;
pub use types::{DEFAULT_CONFIG_FILE, NOT_SPECIFIED, Setting};
