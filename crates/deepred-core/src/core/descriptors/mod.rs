//! The boundary to the external molecular descriptor calculator.
//!
//! Descriptor chemistry is not implemented here. A [`DescriptorCalculator`] only has to
//! honor one contract: given a directory holding a structure list, write a CSV with a `Name`
//! column plus numeric descriptor columns, one row per structure, to the requested path.

pub mod padel;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use padel::PadelDescriptor;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Descriptor tool resource not found: {path}")]
    MissingResource { path: PathBuf },
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Descriptor tool exited unsuccessfully ({status})")]
    ExitStatus { status: std::process::ExitStatus },
}

pub trait DescriptorCalculator {
    /// Computes descriptors for every structure file in `input_dir` and writes them to
    /// `output_path`, blocking until done.
    fn calculate(&self, input_dir: &Path, output_path: &Path) -> Result<(), DescriptorError>;
}
