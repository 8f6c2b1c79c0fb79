//! Error types for config and icon table loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON icon table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unsupported file format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, AssetError>;

/// Read a file to a string, keeping the path in the error.
pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
