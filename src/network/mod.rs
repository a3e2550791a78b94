//! Fixed-topology multilayer perceptron
//!
//! A [`Network`] owns one [`Layer`] per index `0..layers`. Layer 0 is the
//! input, the last layer is the linear output, and every layer in between
//! is a ReLU layer of the shared hidden width.
//!
//! # Usage
//!
//! ```
//! use feedforward_ann::network::{Network, Topology};
//!
//! let topology = Topology::new(2, 1, 4, 3);
//! let mut net = Network::with_seed(topology, 42).unwrap();
//!
//! let inputs = [0.0, 1.0, 1.0, 0.0];
//! let targets = [1.0, 1.0];
//! net.train(&inputs, &targets, 0.1, 2);
//!
//! let output = net.infer(&[0.0, 1.0]);
//! assert_eq!(output.len(), 1);
//! ```
//!
//! Forward and backward passes share the per-layer activation cache, so they
//! are only reachable through [`Network::infer`] and [`Network::train`];
//! `train` always runs the forward pass for a sample right before its
//! backward pass.

mod backward;
mod forward;
mod trainer;

pub use trainer::MAX_BATCH;

use crate::errors::NetworkError;
use crate::layers::Layer;
use crate::utils::{quadratic_loss, SimpleRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest accepted input, output, or hidden width.
pub const MAX_WIDTH: usize = 1_000_000;
/// Fewest layers: input, one hidden, output.
pub const MIN_LAYERS: usize = 3;
pub const MAX_LAYERS: usize = 20;

/// Shape of a network: input width, output width, shared hidden width, and
/// the total number of layers including input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input: usize,
    pub output: usize,
    pub hidden: usize,
    pub layers: usize,
}

impl Topology {
    /// Create a topology.
    ///
    /// # Panics
    ///
    /// Panics if any width is outside `1..=1_000_000` or `layers` is outside
    /// `3..=20`.
    pub fn new(input: usize, output: usize, hidden: usize, layers: usize) -> Self {
        let topology = Self {
            input,
            output,
            hidden,
            layers,
        };
        if let Err(message) = topology.check() {
            panic!("invalid topology: {}", message);
        }
        topology
    }

    /// Check the size bounds without panicking.
    pub fn check(&self) -> Result<(), String> {
        let widths = [
            ("input", self.input),
            ("output", self.output),
            ("hidden", self.hidden),
        ];
        for (name, width) in widths {
            if !(1..=MAX_WIDTH).contains(&width) {
                return Err(format!(
                    "{} width {} outside 1..={}",
                    name, width, MAX_WIDTH
                ));
            }
        }
        if !(MIN_LAYERS..=MAX_LAYERS).contains(&self.layers) {
            return Err(format!(
                "layer count {} outside {}..={}",
                self.layers, MIN_LAYERS, MAX_LAYERS
            ));
        }
        Ok(())
    }

    /// Width of layer `l`.
    pub fn layer_size(&self, l: usize) -> usize {
        if l == 0 {
            self.input
        } else if l + 1 == self.layers {
            self.output
        } else {
            self.hidden
        }
    }

    /// Total weights and biases across layers `1..layers`.
    pub fn parameter_count(&self) -> usize {
        (1..self.layers)
            .map(|l| {
                let n = self.layer_size(l);
                n * self.layer_size(l - 1) + n
            })
            .sum()
    }
}

/// The network engine: parameter store plus forward, backward, and update.
///
/// All buffers are allocated at construction and reused by every call.
/// Cloning deep-copies every buffer.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    layers: Vec<Layer>,
}

impl Network {
    /// Construct a network, drawing initial weights from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `topology` violates the bounds checked by [`Topology::check`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] if a buffer cannot be allocated. Buffers
    /// allocated before the failure are released.
    pub fn new(topology: Topology, rng: &mut SimpleRng) -> Result<Self, NetworkError> {
        if let Err(message) = topology.check() {
            panic!("invalid topology: {}", message);
        }

        let mut layers = Vec::with_capacity(topology.layers);
        layers.push(Layer::input(topology.input)?);
        for l in 1..topology.layers {
            layers.push(Layer::dense(
                l,
                topology.layer_size(l),
                topology.layer_size(l - 1),
                rng,
            )?);
        }

        debug!(
            input = topology.input,
            output = topology.output,
            hidden = topology.hidden,
            layers = topology.layers,
            parameters = topology.parameter_count(),
            "network constructed"
        );

        Ok(Self { topology, layers })
    }

    /// Construct a network with a fresh [`SimpleRng`] seeded by `seed`.
    pub fn with_seed(topology: Topology, seed: u64) -> Result<Self, NetworkError> {
        let mut rng = SimpleRng::new(seed);
        Self::new(topology, &mut rng)
    }

    /// Release the network and every buffer it owns.
    ///
    /// Equivalent to dropping it.
    pub fn release(self) {
        debug!(layers = self.layers.len(), "network released");
        drop(self);
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Layer `l`.
    ///
    /// # Panics
    ///
    /// Panics if `l >= topology().layers`.
    pub fn layer(&self, l: usize) -> &Layer {
        &self.layers[l]
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .filter_map(Layer::params)
            .map(|p| p.parameter_count())
            .sum()
    }

    /// Run a forward pass and return the output activation.
    ///
    /// The returned slice borrows the network's output buffer and stays valid
    /// until the next call that takes `&mut self`.
    ///
    /// # Panics
    ///
    /// Panics if `x.len()` differs from the input width.
    pub fn infer(&mut self, x: &[f64]) -> &[f64] {
        assert_eq!(
            x.len(),
            self.topology.input,
            "input vector length must equal the input width"
        );
        self.forward(x);
        self.output()
    }

    /// Quadratic loss `½‖infer(x) − y‖²` for one sample.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` has the wrong length.
    pub fn loss(&mut self, x: &[f64], y: &[f64]) -> f64 {
        assert_eq!(
            y.len(),
            self.topology.output,
            "target vector length must equal the output width"
        );
        let output = self.infer(x);
        quadratic_loss(output, y)
    }

    pub(crate) fn output(&self) -> &[f64] {
        &self.layers[self.layers.len() - 1].activation
    }
}
