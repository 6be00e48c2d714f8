//! # Core Module
//!
//! Stateless building blocks for the prediction pipeline.
//!
//! - **File I/O** ([`io`]) - Structure lists, feature tables, the reference dataset, and result CSVs
//! - **Feature Scaling** ([`scaling`]) - Zero-mean/unit-variance standardization
//! - **Classification** ([`model`]) - The classifier interface and the ONNX Runtime backend
//! - **Descriptor Calculation** ([`descriptors`]) - The boundary to the external PaDEL-Descriptor tool

pub mod descriptors;
pub mod io;
pub mod model;
pub mod scaling;
