//! # Workflows Module
//!
//! Top-level entry points that tie [`crate::core`] and [`crate::engine`] together.
//!
//! - **Prediction Workflow** ([`predict`]) - Structure list to BBB class CSV, reusing cached
//!   descriptors when they are still valid.
//! - **Sort Workflow** ([`sort`]) - Reorders a result CSV by the number at the end of each
//!   sample identifier.

pub mod predict;
pub mod sort;
