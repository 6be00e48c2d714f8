//! # DeePred-BBB Core Library
//!
//! Predicts blood-brain-barrier (BBB) permeability for batches of small molecules. Molecular
//! descriptors are computed by the external PaDEL-Descriptor tool, standardized against a
//! bundled reference dataset, and scored by a pretrained deep neural network.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: CSV and structure-list I/O,
//!   the standard scaler, the classifier interface, and the descriptor-tool boundary.
//!
//! - **[`engine`]: The Logic Core.** Configuration, the feature-cache decision, the scaled
//!   predictor, progress reporting, and the error type shared by all workflows.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures: the prediction pipeline and
//!   the result-sorting utility.

pub mod core;
pub mod engine;
pub mod workflows;
