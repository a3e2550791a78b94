//! Configuration structures for training
//!
//! This module provides the JSON training configuration used by the
//! `mnist_ann` driver: network topology, mini-batch settings, seed, and
//! dataset paths. Every field is optional in the file; missing fields take
//! the defaults below.
//!
//! # Example
//!
//! ```json
//! {
//!   "topology": { "input": 784, "output": 10, "hidden": 100, "layers": 4 },
//!   "batch_size": 8,
//!   "epochs": 4,
//!   "learning_rate": 0.1,
//!   "seed": 1,
//!   "train_images": "data/train-images",
//!   "train_labels": "data/train-labels",
//!   "test_images": "data/test-images",
//!   "test_labels": "data/test-labels"
//! }
//! ```

use crate::errors::ConfigError;
use crate::network::{Topology, MAX_BATCH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Training run settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Network shape.
    pub topology: Topology,

    /// Samples per gradient step (1..=128).
    pub batch_size: usize,

    /// Number of passes over the training set.
    pub epochs: usize,

    /// Gradient-descent step size, in (0, 1].
    pub learning_rate: f64,

    /// Seed for weight initialization.
    pub seed: u64,

    pub train_images: PathBuf,
    pub train_labels: PathBuf,
    pub test_images: PathBuf,
    pub test_labels: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            topology: Topology {
                input: 28 * 28,
                output: 10,
                hidden: 100,
                layers: 4,
            },
            batch_size: 8,
            epochs: 4,
            learning_rate: 0.1,
            seed: 1,
            train_images: PathBuf::from("data/train-images"),
            train_labels: PathBuf::from("data/train-labels"),
            test_images: PathBuf::from("data/test-images"),
            test_labels: PathBuf::from("data/test-labels"),
        }
    }
}

impl TrainingConfig {
    /// Point all four dataset paths at files with the default names inside
    /// `dir`.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.train_images = dir.join("train-images");
        self.train_labels = dir.join("train-labels");
        self.test_images = dir.join("test-images");
        self.test_labels = dir.join("test-labels");
        self
    }

    /// Check every value the engine would otherwise reject with a panic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.topology
            .check()
            .map_err(|message| ConfigError::InvalidValue {
                field: "topology",
                message,
            })?;

        if !(1..=MAX_BATCH).contains(&self.batch_size) {
            return Err(ConfigError::InvalidValue {
                field: "batch_size",
                message: format!("{} outside 1..={}", self.batch_size, MAX_BATCH),
            });
        }

        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "learning_rate",
                message: format!("{} outside (0, 1]", self.learning_rate),
            });
        }

        Ok(())
    }
}

/// Loads a training configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it into a [`TrainingConfig`], and
/// validates it.
///
/// # Examples
///
/// ```no_run
/// use feedforward_ann::config::load_config;
///
/// let cfg = load_config("config/mnist.json").unwrap();
/// assert!(cfg.batch_size >= 1);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TrainingConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: TrainingConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
