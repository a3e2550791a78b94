//! Feedforward neural-network engine
//!
//! A fixed-topology multilayer perceptron trained by mini-batch gradient
//! descent with backpropagation, plus the IDX dataset reader and training
//! loop used to drive it on labeled images.
//!
//! # Modules
//!
//! - `network`: Topology, construction, inference, and training
//! - `layers`: Per-layer activation/error caches and dense parameters
//! - `utils`: Linear-algebra kernels, ReLU, quadratic loss, seedable RNG
//! - `dataset`: IDX label and image file parsing
//! - `driver`: Batching, one-hot targets, epoch training, accuracy
//! - `config`: JSON training configuration
//! - `errors`: Error types

pub mod config;
pub mod dataset;
pub mod driver;
pub mod errors;
pub mod layers;
pub mod network;
pub mod utils;

pub use network::{Network, Topology};
