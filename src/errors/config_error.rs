//! Training configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a training configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },

    #[error("Dataset does not fit the network: {message}")]
    Mismatch { message: String },
}
