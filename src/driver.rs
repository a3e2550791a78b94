//! Training and evaluation loop over a labeled image set
//!
//! Pixels are scaled to `[0, 1]`, labels become one-hot target vectors, and
//! samples are fed to the network in order, `batch_size` at a time. A
//! trailing partial batch is skipped.

use crate::config::TrainingConfig;
use crate::dataset::LabeledImages;
use crate::errors::ConfigError;
use crate::network::{Network, Topology, MAX_BATCH};
use tracing::{debug, info, warn};

/// Batches between progress events.
const PROGRESS_INTERVAL: usize = 1000;

/// Result of one pass over the training set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub batches: usize,
    /// Mean of the per-batch losses, each measured before its update.
    pub mean_loss: f64,
}

/// Classification outcome on a labeled set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn error_rate(&self) -> f64 {
        1.0 - self.accuracy()
    }
}

/// Per-epoch record produced by [`run_epochs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochSummary {
    pub epoch: usize,
    pub training: EpochReport,
    pub evaluation: Evaluation,
}

/// Scale bytes to `[0, 1]`: `dst[i] = pixels[i] / 255`.
pub fn normalize_pixels(dst: &mut [f64], pixels: &[u8]) {
    debug_assert_eq!(dst.len(), pixels.len(), "normalize_pixels length mismatch");

    for (d, &p) in dst.iter_mut().zip(pixels) {
        *d = p as f64 / 255.0;
    }
}

/// Write a one-hot encoding of `label` into `dst`.
///
/// # Panics
///
/// Panics if `label` is not a valid index into `dst`.
pub fn one_hot(dst: &mut [f64], label: u8) {
    let label = label as usize;
    assert!(
        label < dst.len(),
        "label {} out of range for {} classes",
        label,
        dst.len()
    );
    dst.fill(0.0);
    dst[label] = 1.0;
}

/// Index of the first maximum. Returns 0 for an empty slice.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

/// Check that images have `topology.input` pixels and every label indexes an
/// output neuron.
pub fn check_fit(topology: &Topology, set: &LabeledImages) -> Result<(), ConfigError> {
    let image_len = set.images.image_len();
    if image_len != topology.input {
        return Err(ConfigError::Mismatch {
            message: format!(
                "images have {} pixels but the network takes {} inputs",
                image_len, topology.input
            ),
        });
    }
    if let Some(&label) = set.labels.iter().find(|&&l| l as usize >= topology.output) {
        return Err(ConfigError::Mismatch {
            message: format!(
                "label {} has no output neuron (output width {})",
                label, topology.output
            ),
        });
    }
    Ok(())
}

/// One pass over `set` in order, one gradient step per full batch.
///
/// # Panics
///
/// Panics under the same conditions as [`Network::train`], or if a label is
/// out of range for the output width.
pub fn train_epoch(
    network: &mut Network,
    set: &LabeledImages,
    batch_size: usize,
    eta: f64,
) -> EpochReport {
    assert!(
        (1..=MAX_BATCH).contains(&batch_size),
        "batch size {} outside 1..={}",
        batch_size,
        MAX_BATCH
    );
    let topology = network.topology();
    let batches = set.len() / batch_size;
    if batches == 0 {
        warn!(
            samples = set.len(),
            batch_size, "training set smaller than one batch"
        );
    }

    let mut inputs = vec![0.0; batch_size * topology.input];
    let mut targets = vec![0.0; batch_size * topology.output];
    let mut total_loss = 0.0;

    for batch in 0..batches {
        let first = batch * batch_size;
        for (j, (x, y)) in inputs
            .chunks_exact_mut(topology.input)
            .zip(targets.chunks_exact_mut(topology.output))
            .enumerate()
        {
            normalize_pixels(x, set.images.image(first + j));
            one_hot(y, set.labels[first + j]);
        }

        total_loss += network.train(&inputs, &targets, eta, batch_size);

        if (batch + 1) % PROGRESS_INTERVAL == 0 {
            debug!(batch = batch + 1, total = batches, "training");
        }
    }

    let mean_loss = if batches == 0 {
        0.0
    } else {
        total_loss / batches as f64
    };
    EpochReport { batches, mean_loss }
}

/// Classify every image in `set` by the argmax of the network output.
pub fn evaluate(network: &mut Network, set: &LabeledImages) -> Evaluation {
    let mut x = vec![0.0; network.topology().input];
    let mut correct = 0;

    for (index, &label) in set.labels.iter().enumerate() {
        normalize_pixels(&mut x, set.images.image(index));
        if argmax(network.infer(&x)) == label as usize {
            correct += 1;
        }
    }

    Evaluation {
        correct,
        total: set.len(),
    }
}

/// Train for `config.epochs` epochs, evaluating on `test` after each one.
///
/// # Errors
///
/// Returns [`ConfigError`] if the configuration is invalid or either set
/// does not fit the network.
pub fn run_epochs(
    network: &mut Network,
    train: &LabeledImages,
    test: &LabeledImages,
    config: &TrainingConfig,
) -> Result<Vec<EpochSummary>, ConfigError> {
    config.validate()?;
    let topology = network.topology();
    check_fit(&topology, train)?;
    check_fit(&topology, test)?;

    let mut summaries = Vec::with_capacity(config.epochs);
    for epoch in 0..config.epochs {
        let training = train_epoch(network, train, config.batch_size, config.learning_rate);
        let evaluation = evaluate(network, test);
        info!(
            epoch,
            batches = training.batches,
            loss = training.mean_loss,
            accuracy = evaluation.accuracy(),
            "epoch complete"
        );
        summaries.push(EpochSummary {
            epoch,
            training,
            evaluation,
        });
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pixels() {
        let mut dst = [9.0; 3];
        normalize_pixels(&mut dst, &[0, 51, 255]);
        assert_eq!(dst, [0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_one_hot_clears_previous() {
        let mut dst = [1.0, 1.0, 1.0];
        one_hot(&mut dst, 2);
        assert_eq!(dst, [0.0, 0.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_one_hot_out_of_range() {
        let mut dst = [0.0; 2];
        one_hot(&mut dst, 2);
    }

    #[test]
    fn test_argmax_first_maximum() {
        assert_eq!(argmax(&[0.1, 0.7, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[-1.0, -2.0]), 0);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn test_evaluation_rates() {
        let eval = Evaluation {
            correct: 3,
            total: 4,
        };
        assert_eq!(eval.accuracy(), 0.75);
        assert_eq!(eval.error_rate(), 0.25);
        assert_eq!(Evaluation { correct: 0, total: 0 }.accuracy(), 0.0);
    }
}
