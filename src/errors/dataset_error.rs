//! IDX dataset loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an IDX label or image file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Header truncated: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("Bad magic number: expected {expected:#010x}, got {actual:#010x}")]
    BadMagic { expected: u32, actual: u32 },

    #[error("File declares zero items")]
    EmptySet,

    #[error("Invalid image dimensions {rows} x {cols}")]
    InvalidDimensions { rows: u32, cols: u32 },

    #[error("Payload truncated: expected {expected} bytes, got {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    #[error("Image count {images} does not match label count {labels}")]
    CountMismatch { images: usize, labels: usize },
}
