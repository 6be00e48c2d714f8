use super::error::EngineError;
use crate::core::io::features::FeatureTable;
use crate::core::model::{BbbClass, Classifier, ModelError};
use crate::core::scaling::StandardScaler;
use ndarray::ArrayView2;
use tracing::debug;

/// Scales descriptor rows against the reference distribution, then classifies them.
///
/// The scaler is fitted anew for every predictor; nothing about it is persisted.
pub struct Predictor<'a, C: Classifier + ?Sized> {
    scaler: StandardScaler,
    classifier: &'a C,
    threshold: f32,
}

impl<'a, C: Classifier + ?Sized> Predictor<'a, C> {
    pub fn new(
        reference: ArrayView2<f64>,
        classifier: &'a C,
        threshold: f32,
    ) -> Result<Self, EngineError> {
        let scaler = StandardScaler::fit(reference)?;
        debug!(
            "Scaler fitted on {} reference rows x {} columns",
            reference.nrows(),
            scaler.num_features()
        );
        Ok(Self {
            scaler,
            classifier,
            threshold,
        })
    }

    /// Returns one class per row of `features`, in row order.
    pub fn predict(&self, features: &FeatureTable) -> Result<Vec<BbbClass>, EngineError> {
        if features.num_features() != self.scaler.num_features() {
            return Err(EngineError::FeatureMismatch {
                expected: self.scaler.num_features(),
                found: features.num_features(),
            });
        }
        if features.num_samples() == 0 {
            return Ok(Vec::new());
        }

        let scaled = self.scaler.transform(features.values.view())?;
        let input = scaled.mapv(|v| v as f32);
        let probabilities = self.classifier.predict_proba(input.view())?;

        if probabilities.len() != features.num_samples() {
            return Err(ModelError::OutputShape {
                expected: features.num_samples(),
                found: probabilities.len(),
            }
            .into());
        }

        probabilities
            .into_iter()
            .enumerate()
            .map(|(index, p)| {
                if p.is_finite() {
                    Ok(BbbClass::from_probability(p, self.threshold))
                } else {
                    Err(EngineError::from(ModelError::NonFiniteProbability {
                        index,
                        value: p,
                    }))
                }
            })
            .collect()
    }
}
