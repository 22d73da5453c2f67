//! Result store configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

/// Result store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON document holding all result records
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/results.json")
}
