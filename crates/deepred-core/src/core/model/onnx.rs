use super::{Classifier, ModelError};
use ndarray::ArrayView2;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Tensor;
use std::path::Path;
use tracing::{debug, info};

/// The DeePred network exported to ONNX and executed with ONNX Runtime on the CPU.
pub struct OnnxClassifier {
    session: Session,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let to_load_error = |source: ort::Error| ModelError::Load {
            path: path.to_string_lossy().to_string(),
            source,
        };

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
            .and_then(|b| b.with_intra_threads(1))
            .and_then(|b| b.commit_from_file(path))
            .map_err(to_load_error)?;

        info!("Model loaded from {:?}", path);
        Ok(Self { session })
    }
}

impl Classifier for OnnxClassifier {
    fn predict_proba(&self, features: ArrayView2<f32>) -> Result<Vec<f32>, ModelError> {
        let expected = features.nrows();
        debug!(
            "Running ONNX inference on {} samples x {} features",
            expected,
            features.ncols()
        );

        let input = Tensor::from_array(features.to_owned())?;
        let outputs = self.session.run(ort::inputs![input]?)?;
        let probabilities = outputs[0].try_extract_tensor::<f32>()?;

        // A sigmoid head yields shape [n, 1]; anything else cannot be one score per sample.
        if probabilities.len() != expected {
            return Err(ModelError::OutputShape {
                expected,
                found: probabilities.len(),
            });
        }
        Ok(probabilities.iter().copied().collect())
    }
}
