//! Backward pass for the quadratic loss `½‖a[L] − y‖²`.
//!
//! Relies on the activations cached by the forward pass of the same sample.

use super::Network;
use crate::utils::linalg::{add, matvec_t, outer_accum, sub};
use crate::utils::relu_grad_mask;

impl Network {
    /// Compute every layer's error signal for target `y` and add this
    /// sample's gradients into the accumulators. Weights are left untouched.
    pub(crate) fn backward(&mut self, y: &[f64]) {
        let last = self.layers.len() - 1;

        // Linear output layer: d[L] = a[L] - y
        let output = &mut self.layers[last];
        sub(&mut output.error_signal, &output.activation, y);

        // d[l-1] = (W[l]ᵗ · d[l]) ⊙ relu'(a[l-1])
        for l in (2..=last).rev() {
            let (lower, upper) = self.layers.split_at_mut(l);
            let below = &mut lower[l - 1];
            let layer = &upper[0];
            let Some(params) = layer.params.as_ref() else {
                unreachable!("layer {} has no parameters", l);
            };

            matvec_t(
                &mut below.error_signal,
                &params.weights,
                &layer.error_signal,
                params.rows(),
                params.cols(),
            );
            relu_grad_mask(&mut below.error_signal, &below.activation);
        }

        // db[l] += d[l], dW[l] += d[l] ⊗ a[l-1]
        for l in 1..=last {
            let (lower, upper) = self.layers.split_at_mut(l);
            let input = &lower[l - 1].activation;
            let layer = &mut upper[0];
            let Some(params) = layer.params.as_mut() else {
                unreachable!("layer {} has no parameters", l);
            };
            let (rows, cols) = (params.rows(), params.cols());

            add(&mut params.bias_grads, &layer.error_signal);
            outer_accum(&mut params.weight_grads, &layer.error_signal, input, rows, cols);
        }
    }
}
