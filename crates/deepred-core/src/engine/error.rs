use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::descriptors::DescriptorError;
use crate::core::io::TableError;
use crate::core::model::ModelError;
use crate::core::scaling::ScalingError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Input file NOT found: no '*.smi' structure file in {dir:?}")]
    NoStructureFile { dir: PathBuf },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Descriptor calculation failed: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("Feature scaling failed: {0}")]
    Scaling(#[from] ScalingError),

    #[error("Classifier error: {0}")]
    Model(#[from] ModelError),

    #[error(
        "Feature table has {found} descriptor columns but the reference dataset has {expected}"
    )]
    FeatureMismatch { expected: usize, found: usize },

    #[error("Identifier '{name}' does not end with a number")]
    MissingNumericSuffix { name: String },

    #[error("Numeric suffix of identifier '{name}' is too large")]
    NumericSuffixOverflow { name: String },
}
