//! The interface to the pretrained BBB permeability classifier.
//!
//! The network itself is treated as an opaque artifact: the pipeline only needs a function
//! from a batch of scaled feature rows to one probability per row. [`Classifier`] captures
//! that contract; [`onnx::OnnxClassifier`] fulfils it with ONNX Runtime.

pub mod onnx;

use ndarray::ArrayView2;
use std::fmt;
use thiserror::Error;

/// Probability above which a sample is called permeable.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to load model from '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: ort::Error,
    },
    #[error("Model inference failed: {0}")]
    Inference(#[from] ort::Error),
    #[error("Model produced {found} outputs for {expected} samples")]
    OutputShape { expected: usize, found: usize },
    #[error("Model produced a non-finite probability ({value}) for sample {index}")]
    NonFiniteProbability { index: usize, value: f32 },
}

/// A binary classifier that scores standardized descriptor rows.
pub trait Classifier {
    /// Returns one probability in `[0, 1]` per row of `features`, in row order.
    fn predict_proba(&self, features: ArrayView2<f32>) -> Result<Vec<f32>, ModelError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BbbClass {
    NonPermeable,
    Permeable,
}

impl BbbClass {
    /// Thresholds a probability. A probability exactly at the threshold is non-permeable,
    /// which at 0.5 agrees with round-half-to-even.
    pub fn from_probability(probability: f32, threshold: f32) -> Self {
        if probability > threshold {
            BbbClass::Permeable
        } else {
            BbbClass::NonPermeable
        }
    }

    pub fn label(self) -> u8 {
        match self {
            BbbClass::NonPermeable => 0,
            BbbClass::Permeable => 1,
        }
    }
}

impl fmt::Display for BbbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BbbClass::NonPermeable => write!(f, "BBB-"),
            BbbClass::Permeable => write!(f, "BBB+"),
        }
    }
}
