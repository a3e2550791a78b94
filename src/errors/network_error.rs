//! Engine construction errors.

use thiserror::Error;

/// Errors that can occur while constructing a network.
///
/// Invalid sizes are precondition failures and panic instead; only resource
/// exhaustion is reported here.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Out of memory allocating {elements} values for layer {layer}")]
    OutOfMemory { layer: usize, elements: usize },

    #[error("Buffer size overflow for layer {layer}: {rows} x {cols}")]
    SizeOverflow { layer: usize, rows: usize, cols: usize },
}
