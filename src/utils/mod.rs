//! Shared numeric utilities for the network engine
//!
//! This module provides the linear-algebra kernels, activation functions,
//! loss, and the seedable random source used for initialization.

pub mod activations;
pub mod linalg;
pub mod loss;
pub mod rng;

pub use activations::{relu_grad_mask, relu_inplace};
pub use loss::quadratic_loss;
pub use rng::SimpleRng;
