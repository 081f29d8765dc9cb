//! Config loading operations.

use super::model::TrainingConfig;
use crate::error::{CheckError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

impl TrainingConfig {
    /// Load a training config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(TrainingConfig)` - File read and parsed
    /// * `Err(CheckError::MissingFile)` - Nothing exists at `path`
    /// * `Err(CheckError::Unreadable)` - Path exists but could not be read
    /// * `Err(CheckError::Parse)` - Contents are not UTF-8 YAML of the expected shape
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Raw bytes: bad encoding is a parse error, not a read error.
        let content = std::fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CheckError::MissingFile(path.to_path_buf())
            } else {
                CheckError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read config file");

        Self::from_slice(&content)
    }

    /// Parse a training config from a YAML string.
    ///
    /// An empty document is an empty config, not an error.
    #[cfg(test)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_slice(yaml.as_bytes())
    }

    /// Parse a training config from raw YAML bytes.
    ///
    /// An empty document is an empty config, not an error.
    pub fn from_slice(yaml: &[u8]) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_slice(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        // Parse from the source again so errors carry line and column.
        Ok(serde_yaml::from_slice(yaml)?)
    }
}
