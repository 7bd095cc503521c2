//! Dataset-specific error types.
//!
//! Structured errors for dataset loading. All errors carry the file path
//! involved so a misconfigured `--dataset` flag is diagnosable from the
//! message alone.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file does not exist.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// JSON parsing failed.
    #[error("failed to parse JSON dataset at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// YAML parsing failed.
    #[error("failed to parse YAML dataset at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The bundled dataset failed to parse. Indicates a build defect,
    /// not a user error.
    #[error("bundled dataset is corrupt: {0}")]
    BundledCorrupt(#[source] serde_json::Error),

    /// Other IO failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
