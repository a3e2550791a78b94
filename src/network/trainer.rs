//! Mini-batch gradient descent.

use super::Network;
use crate::utils::quadratic_loss;
use tracing::trace;

/// Largest accepted mini-batch.
pub const MAX_BATCH: usize = 128;

impl Network {
    /// Run one mini-batch gradient-descent step and return the batch-mean
    /// quadratic loss measured before the update.
    ///
    /// `inputs` holds `k` consecutive input vectors and `targets` holds `k`
    /// consecutive target vectors. Gradients are accumulated over the batch
    /// and applied as `W -= (eta / k) * dW`, `b -= (eta / k) * db`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is outside `1..=128`, `eta` is outside `(0, 1]`, or the
    /// slices do not hold exactly `k` vectors of the right width.
    ///
    /// # Example
    ///
    /// ```
    /// use feedforward_ann::network::{Network, Topology};
    ///
    /// let mut net = Network::with_seed(Topology::new(1, 1, 2, 3), 7).unwrap();
    /// let before = net.loss(&[0.5], &[1.0]);
    /// let reported = net.train(&[0.5], &[1.0], 0.1, 1);
    /// assert_eq!(before, reported);
    /// ```
    pub fn train(&mut self, inputs: &[f64], targets: &[f64], eta: f64, k: usize) -> f64 {
        assert!(
            (1..=MAX_BATCH).contains(&k),
            "batch size {} outside 1..={}",
            k,
            MAX_BATCH
        );
        assert!(
            eta > 0.0 && eta <= 1.0,
            "learning rate {} outside (0, 1]",
            eta
        );
        let input_width = self.topology.input;
        let output_width = self.topology.output;
        assert_eq!(
            inputs.len(),
            k * input_width,
            "input batch must hold k vectors of the input width"
        );
        assert_eq!(
            targets.len(),
            k * output_width,
            "target batch must hold k vectors of the output width"
        );

        for params in self.layers.iter_mut().filter_map(|l| l.params.as_mut()) {
            params.zero_grads();
        }

        let mut total_loss = 0.0;
        for (x, y) in inputs
            .chunks_exact(input_width)
            .zip(targets.chunks_exact(output_width))
        {
            self.forward(x);
            total_loss += quadratic_loss(self.output(), y);
            self.backward(y);
        }

        let scale = -eta / k as f64;
        for params in self.layers.iter_mut().filter_map(|l| l.params.as_mut()) {
            params.apply_grads(scale);
        }

        let mean_loss = total_loss / k as f64;
        trace!(k, eta, loss = mean_loss, "mini-batch step");
        mean_loss
    }
}
