//! Zero-mean/unit-variance feature standardization.
//!
//! Matches the behavior of scikit-learn's `StandardScaler` with default settings: the
//! variance is the population variance (`ddof = 0`), non-finite entries are ignored while
//! fitting and passed through while transforming, and constant columns keep a scale of 1.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScalingError {
    #[error("Cannot fit a scaler on a dataset with no rows")]
    EmptyDataset,
    #[error("Scaler was fitted on {expected} columns but the input has {found}")]
    ColumnMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn fit(data: ArrayView2<f64>) -> Result<Self, ScalingError> {
        if data.nrows() == 0 {
            return Err(ScalingError::EmptyDataset);
        }

        let mut mean = Array1::zeros(data.ncols());
        let mut scale = Array1::ones(data.ncols());
        for (j, column) in data.axis_iter(Axis(1)).enumerate() {
            let finite: Vec<f64> = column.iter().copied().filter(|v| v.is_finite()).collect();
            if finite.is_empty() {
                mean[j] = f64::NAN;
                continue;
            }
            let n = finite.len() as f64;
            let m = finite.iter().sum::<f64>() / n;
            let var = finite.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / n;
            mean[j] = m;
            scale[j] = handle_zero_scale(var.sqrt());
        }

        Ok(Self { mean, scale })
    }

    pub fn transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>, ScalingError> {
        if data.ncols() != self.num_features() {
            return Err(ScalingError::ColumnMismatch {
                expected: self.num_features(),
                found: data.ncols(),
            });
        }
        Ok((&data - &self.mean) / &self.scale)
    }

    pub fn num_features(&self) -> usize {
        self.mean.len()
    }
}

fn handle_zero_scale(std: f64) -> f64 {
    if std < 10.0 * f64::EPSILON { 1.0 } else { std }
}
