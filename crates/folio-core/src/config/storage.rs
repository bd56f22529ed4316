//! Upload storage configuration.

use serde::Deserialize;

/// Local storage settings for uploaded documents.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory that holds uploaded files.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Largest accepted request body for uploads, in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}
