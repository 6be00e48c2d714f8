//! Provides input/output functionality for the tabular files used by the pipeline.
//!
//! All readers take explicit paths and report failures through [`TableError`], which always
//! carries the path of the offending file.

mod error;
pub mod features;
pub mod reference;
pub mod results;
pub mod structures;

pub use error::TableError;
