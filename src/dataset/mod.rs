//! Labeled image datasets in the IDX binary format
//!
//! The engine itself consumes plain `f64` vectors; this module only reads
//! the byte payloads that the training driver normalizes and batches.

pub mod idx;

pub use idx::{load_images, load_labels, parse_images, parse_labels, ImageSet};

use crate::errors::DatasetError;
use std::path::Path;
use tracing::debug;

/// Images paired one-to-one with their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledImages {
    pub images: ImageSet,
    pub labels: Vec<u8>,
}

impl LabeledImages {
    /// Pair an image set with its labels.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::CountMismatch`] if the counts differ.
    pub fn new(images: ImageSet, labels: Vec<u8>) -> Result<Self, DatasetError> {
        if images.count != labels.len() {
            return Err(DatasetError::CountMismatch {
                images: images.count,
                labels: labels.len(),
            });
        }
        Ok(Self { images, labels })
    }

    /// Load an image file and a label file and pair them.
    pub fn load(
        images_path: impl AsRef<Path>,
        labels_path: impl AsRef<Path>,
    ) -> Result<Self, DatasetError> {
        let images = load_images(images_path.as_ref())?;
        let labels = load_labels(labels_path.as_ref())?;
        debug!(
            path = %images_path.as_ref().display(),
            count = images.count,
            rows = images.rows,
            cols = images.cols,
            "loaded dataset"
        );
        Self::new(images, labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
