//! Clip store configuration.

use std::path::PathBuf;

/// Clip store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root directory; sessions live under `{data_dir}/sessions/`
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default().data_dir),
        }
    }
}
