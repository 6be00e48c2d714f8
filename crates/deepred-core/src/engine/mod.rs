//! # Engine Module
//!
//! The stateful pieces that sit between the stateless [`crate::core`] building blocks and the
//! end-to-end [`crate::workflows`].
//!
//! - **Configuration** ([`config`]) - Working directory, asset paths, threshold, cache policy
//! - **Feature Cache** ([`cache`]) - Deciding whether a previous descriptor table can be reused
//! - **Prediction** ([`predictor`]) - Reference-fitted scaling followed by classification
//! - **Progress Monitoring** ([`progress`]) - Phase reporting for front-ends
//! - **Error Handling** ([`error`]) - The error type returned by every workflow

pub mod cache;
pub mod config;
pub mod error;
pub mod predictor;
pub mod progress;
