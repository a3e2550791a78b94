//! Forward pass: `a[l] = act(W[l] · a[l-1] + b[l])`, ReLU on hidden layers,
//! identity on the output layer.

use super::Network;
use crate::utils::linalg::{add, matvec};
use crate::utils::relu_inplace;

impl Network {
    /// Copy `x` into layer 0 and compute every later layer's activation.
    pub(crate) fn forward(&mut self, x: &[f64]) {
        let count = self.layers.len();
        self.layers[0].activation.copy_from_slice(x);

        for l in 1..count {
            let (done, rest) = self.layers.split_at_mut(l);
            let input = &done[l - 1].activation;
            let layer = &mut rest[0];
            let Some(params) = layer.params.as_ref() else {
                unreachable!("layer {} has no parameters", l);
            };
            let (rows, cols) = (params.rows(), params.cols());

            matvec(&mut layer.activation, &params.weights, input, rows, cols);
            add(&mut layer.activation, &params.biases);
            if l + 1 < count {
                relu_inplace(&mut layer.activation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::network::{Network, Topology};

    fn set_params(net: &mut Network, l: usize, weights: &[f64], biases: &[f64]) {
        let params = net.layers[l].params.as_mut().unwrap();
        params.weights.copy_from_slice(weights);
        params.biases.copy_from_slice(biases);
    }

    #[test]
    fn test_forward_hand_computed() {
        let mut net = Network::with_seed(Topology::new(2, 1, 2, 3), 1).unwrap();
        set_params(&mut net, 1, &[1.0, 2.0, -1.0, 1.0], &[0.5, -3.0]);
        set_params(&mut net, 2, &[2.0, 4.0], &[-1.0]);

        // hidden pre = [1 + 2 + 0.5, -1 + 1 - 3] = [3.5, -3] -> relu [3.5, 0]
        // output = 2 * 3.5 + 0 - 1 = 6
        let output = net.infer(&[1.0, 1.0]).to_vec();
        assert_eq!(output, vec![6.0]);
        assert_eq!(net.layers[0].activation, vec![1.0, 1.0]);
        assert_eq!(net.layers[1].activation, vec![3.5, 0.0]);
    }

    #[test]
    fn test_output_layer_is_linear() {
        let mut net = Network::with_seed(Topology::new(1, 1, 1, 3), 1).unwrap();
        set_params(&mut net, 1, &[1.0], &[0.0]);
        set_params(&mut net, 2, &[1.0], &[-5.0]);

        // Negative outputs pass through unclipped.
        assert_eq!(net.infer(&[2.0]), &[-3.0]);
    }

    #[test]
    fn test_every_hidden_layer_is_rectified() {
        let mut net = Network::with_seed(Topology::new(1, 1, 1, 4), 1).unwrap();
        set_params(&mut net, 1, &[1.0], &[0.0]);
        set_params(&mut net, 2, &[-1.0], &[0.0]);
        set_params(&mut net, 3, &[1.0], &[0.25]);

        // 2 -> relu(2) = 2 -> relu(-2) = 0 -> 0 + 0.25
        assert_eq!(net.infer(&[2.0]), &[0.25]);
        assert_eq!(net.layers[2].activation, vec![0.0]);
    }
}
