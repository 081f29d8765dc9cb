//! Exit code constants for the axocheck CLI.
//!
//! - 0: Config passed every check
//! - 1: Validation failure (missing/unreadable file, bad YAML, conflicts)
//! - 2: Usage error, reported by clap before any check runs. It is clap's
//!   own code, so no constant is defined for it here.

/// Config passed every check.
pub const SUCCESS: i32 = 0;

/// Validation failure: the config is missing, unreadable, unparseable, or has conflicts.
pub const VALIDATION_FAILURE: i32 = 1;
