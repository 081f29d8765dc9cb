//! Value types and constants for training configs.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::fmt;

/// Config file checked when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "phi4-axolotl_config_fixed.yml";

/// Placeholder shown for settings that are absent or null.
pub const NOT_SPECIFIED: &str = "Not specified";

/// A single config value of whatever type the YAML author chose.
///
/// Axolotl is loose about types (`learning_rate: 2e-4` and
/// `learning_rate: "0.0002"` are both seen in the wild), so values are kept
/// as written instead of being coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Sequences, mappings, and tagged values.
    Other(Value),
}

impl From<Value> for Setting {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => Setting::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Setting::Int(i),
                None => n.as_f64().map_or(Setting::Other(Value::Number(n)), Setting::Float),
            },
            Value::String(s) => Setting::Text(s),
            other => Setting::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for Setting {
    // Going through `Value` accepts tagged scalars, which serde_yaml hands
    // to visitors as enums.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Setting::from)
    }
}

impl Setting {
    /// Whether this value counts as set for mutual-exclusion checks.
    ///
    /// The zero value of each type is unset: `false`, `0`, `0.0`, `""`, and
    /// empty sequences or mappings. NaN and tagged values are set. Null never
    /// reaches here because it deserializes to `None`.
    pub fn is_set(&self) -> bool {
        match self {
            Setting::Bool(b) => *b,
            Setting::Int(n) => *n != 0,
            Setting::Float(x) => *x != 0.0,
            Setting::Text(s) => !s.is_empty(),
            Setting::Other(value) => match value {
                Value::Null => false,
                Value::Sequence(seq) => !seq.is_empty(),
                Value::Mapping(map) => !map.is_empty(),
                _ => true,
            },
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Bool(b) => write!(f, "{}", b),
            Setting::Int(n) => write!(f, "{}", n),
            Setting::Float(x) => fmt_float(*x, f),
            Setting::Text(s) => f.write_str(s),
            // Flow style keeps nested values on one line.
            Setting::Other(value) => match serde_json::to_string(value) {
                Ok(rendered) => f.write_str(&rendered),
                Err(_) => write!(f, "{:?}", value),
            },
        }
    }
}

/// Floats always read as floats: `1.0` stays `1.0`, not `1`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else if x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{:.1}", x)
    } else {
        write!(f, "{}", x)
    }
}

/// Returns true when an optional setting is present and set.
pub fn is_set(setting: Option<&Setting>) -> bool {
    setting.is_some_and(Setting::is_set)
}

/// Render an optional setting, falling back to [`NOT_SPECIFIED`].
pub fn display_or_placeholder(setting: Option<&Setting>) -> String {
    match setting {
        Some(value) => value.to_string(),
        None => NOT_SPECIFIED.to_string(),
    }
}
