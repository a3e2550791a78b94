//! Activation functions for the hidden layers.
//!
//! Hidden layers use ReLU; the output layer is linear and needs nothing here.

/// ReLU applied in-place: `z[i] = max(0, z[i])`.
///
/// Non-positive values (including `-0.0`) become `0.0`.
pub fn relu_inplace(data: &mut [f64]) {
    for value in data.iter_mut() {
        if *value <= 0.0 {
            *value = 0.0;
        }
    }
}

/// ReLU derivative multiplied into an error vector.
///
/// Zeroes `delta[i]` wherever `activation[i] <= 0`. The post-ReLU activation
/// stands in for the pre-activation since `relu(x) <= 0` iff `x <= 0`.
pub fn relu_grad_mask(delta: &mut [f64], activation: &[f64]) {
    debug_assert_eq!(delta.len(), activation.len(), "relu_grad_mask length mismatch");

    for (d, &a) in delta.iter_mut().zip(activation) {
        if a <= 0.0 {
            *d = 0.0;
        }
    }
}
