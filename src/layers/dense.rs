//! Dense (fully connected) parameters for one layer
//!
//! Holds the weights, biases, and their gradient accumulators for the
//! transformation `a[l] = W[l] · a[l-1] + b[l]`.

use super::zeroed;
use crate::errors::NetworkError;
use crate::utils::linalg::axpy_accum;
use crate::utils::SimpleRng;

/// Weights, biases, and gradient accumulators of a layer `l >= 1`.
///
/// The weight matrix is `rows × cols` in row-major order, where `rows` is
/// this layer's width and `cols` the previous layer's width: row `i` holds
/// the incoming weights of output neuron `i`.
///
/// # Example
///
/// ```
/// use feedforward_ann::layers::DenseParams;
/// use feedforward_ann::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(42);
/// let params = DenseParams::new(1, 4, 3, &mut rng).unwrap();
/// assert_eq!(params.weights().len(), 12);
/// assert!(params.biases().iter().all(|&b| b == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct DenseParams {
    rows: usize,
    cols: usize,
    pub(crate) weights: Vec<f64>,
    pub(crate) biases: Vec<f64>,
    pub(crate) weight_grads: Vec<f64>,
    pub(crate) bias_grads: Vec<f64>,
}

impl DenseParams {
    /// Allocate and initialize the parameters of layer `layer`.
    ///
    /// Each weight is `a + u * b` with `u` uniform in `[0, 1]`,
    /// `a = -sqrt(6 / (rows * cols))` and `b = 2 * sqrt(6 / (rows * cols))`,
    /// so weights land in `[a, a + b]`. Biases and gradient accumulators
    /// start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] if any buffer cannot be allocated; buffers
    /// allocated so far are dropped.
    pub fn new(
        layer: usize,
        rows: usize,
        cols: usize,
        rng: &mut SimpleRng,
    ) -> Result<Self, NetworkError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(NetworkError::SizeOverflow { layer, rows, cols })?;

        let mut weights = zeroed(layer, len)?;
        let biases = zeroed(layer, rows)?;
        let weight_grads = zeroed(layer, len)?;
        let bias_grads = zeroed(layer, rows)?;

        let (low, span) = init_bounds(rows, cols);
        for value in &mut weights {
            *value = low + rng.next_f64() * span;
        }

        Ok(Self {
            rows,
            cols,
            weights,
            biases,
            weight_grads,
            bias_grads,
        })
    }

    /// Number of output neurons (this layer's width).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of inputs per neuron (previous layer's width).
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    /// Weight gradients accumulated over the most recent mini-batch.
    pub fn weight_grads(&self) -> &[f64] {
        &self.weight_grads
    }

    /// Bias gradients accumulated over the most recent mini-batch.
    pub fn bias_grads(&self) -> &[f64] {
        &self.bias_grads
    }

    /// Number of trainable parameters: `rows * cols + rows`.
    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }

    pub(crate) fn zero_grads(&mut self) {
        self.weight_grads.fill(0.0);
        self.bias_grads.fill(0.0);
    }

    /// Gradient step: `W += scale * dW`, `b += scale * db`.
    pub(crate) fn apply_grads(&mut self, scale: f64) {
        axpy_accum(&mut self.weights, &self.weight_grads, scale);
        axpy_accum(&mut self.biases, &self.bias_grads, scale);
    }
}

/// Offset `a` and span `b` of the initialization interval `[a, a + b]` for a
/// `rows × cols` weight matrix.
pub fn init_bounds(rows: usize, cols: usize) -> (f64, f64) {
    let r = (6.0 / (rows as f64 * cols as f64)).sqrt();
    (-r, 2.0 * r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_params_creation() {
        let mut rng = SimpleRng::new(42);
        let params = DenseParams::new(1, 5, 10, &mut rng).unwrap();

        assert_eq!(params.rows(), 5);
        assert_eq!(params.cols(), 10);
        assert_eq!(params.weights.len(), 50);
        assert_eq!(params.biases.len(), 5);
        assert_eq!(params.weight_grads.len(), 50);
        assert_eq!(params.bias_grads.len(), 5);
        assert_eq!(params.parameter_count(), 55);
    }

    #[test]
    fn test_initialization_interval() {
        let mut rng = SimpleRng::new(42);
        let params = DenseParams::new(1, 50, 100, &mut rng).unwrap();

        let r = (6.0f64 / 5000.0).sqrt();
        let (low, span) = init_bounds(50, 100);
        assert_eq!(low, -r);
        assert_eq!(span, 2.0 * r);

        for &weight in &params.weights {
            assert!(
                weight >= low && weight <= low + span,
                "Weight {} outside [{}, {}]",
                weight,
                low,
                low + span
            );
        }
        assert!(params.weights.iter().any(|&w| w > 0.0));
        assert!(params.weights.iter().any(|&w| w < 0.0));
        assert!(params.biases.iter().all(|&b| b == 0.0));
    }

    #[test]
    fn test_deterministic_initialization() {
        let mut rng1 = SimpleRng::new(42);
        let p1 = DenseParams::new(1, 5, 10, &mut rng1).unwrap();
        let mut rng2 = SimpleRng::new(42);
        let p2 = DenseParams::new(1, 5, 10, &mut rng2).unwrap();

        assert_eq!(p1.weights, p2.weights);
    }

    #[test]
    fn test_size_overflow_is_reported() {
        let mut rng = SimpleRng::new(1);
        let err = DenseParams::new(3, usize::MAX, 2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::SizeOverflow { layer: 3, rows: usize::MAX, cols: 2 }
        ));
    }

    #[test]
    fn test_apply_grads() {
        let mut rng = SimpleRng::new(7);
        let mut params = DenseParams::new(1, 1, 2, &mut rng).unwrap();
        params.weights.copy_from_slice(&[1.0, 2.0]);
        params.weight_grads.copy_from_slice(&[0.5, -1.0]);
        params.bias_grads.copy_from_slice(&[2.0]);

        params.apply_grads(-0.5);
        assert_eq!(params.weights, vec![0.75, 2.5]);
        assert_eq!(params.biases, vec![-1.0]);

        params.zero_grads();
        assert!(params.weight_grads.iter().all(|&g| g == 0.0));
        assert!(params.bias_grads.iter().all(|&g| g == 0.0));
    }
}
