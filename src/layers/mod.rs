//! Per-layer parameter store
//!
//! Every layer owns its activation cache and error-signal buffer. Layers
//! after the input layer also own a [`DenseParams`] block with weights,
//! biases, and gradient accumulators.

pub mod dense;

pub use dense::DenseParams;

use crate::errors::NetworkError;
use crate::utils::SimpleRng;

/// One stage of the network.
///
/// `activation` holds the most recent forward-pass output (the copied input
/// vector for layer 0). `error_signal` holds the most recent backward-pass
/// error term. Both are overwritten by the next forward/backward pass.
#[derive(Debug, Clone)]
pub struct Layer {
    pub(crate) activation: Vec<f64>,
    pub(crate) error_signal: Vec<f64>,
    pub(crate) params: Option<DenseParams>,
}

impl Layer {
    /// The input layer: caches only, no parameters.
    pub(crate) fn input(size: usize) -> Result<Self, NetworkError> {
        Ok(Self {
            activation: zeroed(0, size)?,
            error_signal: zeroed(0, size)?,
            params: None,
        })
    }

    /// A parameterized layer `index >= 1` of width `size` fed by `fan_in`
    /// values from the previous layer.
    pub(crate) fn dense(
        index: usize,
        size: usize,
        fan_in: usize,
        rng: &mut SimpleRng,
    ) -> Result<Self, NetworkError> {
        let activation = zeroed(index, size)?;
        let error_signal = zeroed(index, size)?;
        let params = DenseParams::new(index, size, fan_in, rng)?;
        Ok(Self {
            activation,
            error_signal,
            params: Some(params),
        })
    }

    /// Width of this layer.
    pub fn size(&self) -> usize {
        self.activation.len()
    }

    /// Most recent forward-pass output.
    pub fn activation(&self) -> &[f64] {
        &self.activation
    }

    /// Most recent backward-pass error term.
    pub fn error_signal(&self) -> &[f64] {
        &self.error_signal
    }

    /// Weights and gradients; `None` for the input layer.
    pub fn params(&self) -> Option<&DenseParams> {
        self.params.as_ref()
    }
}

/// Allocate a zero-filled buffer, reporting allocation failure instead of
/// aborting.
pub(crate) fn zeroed(layer: usize, len: usize) -> Result<Vec<f64>, NetworkError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| NetworkError::OutOfMemory {
            layer,
            elements: len,
        })?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}
