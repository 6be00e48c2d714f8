use crate::core::model::DEFAULT_THRESHOLD;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FEATURES_FILE: &str = "PaDEL_features.csv";
pub const DEFAULT_REFERENCE_FILE: &str = "data.csv";
pub const DEFAULT_MODEL_FILE: &str = "DeePredmodel.onnx";
pub const DEFAULT_PADEL_JAR: &str = "PaDEL-Descriptor/PaDEL-Descriptor.jar";
pub const DEFAULT_PADEL_DESCRIPTORS: &str = "PaDEL-Descriptor/descriptors.xml";
pub const DEFAULT_OUTPUT_FILE: &str = "DeePred-BBB_predictions.csv";
pub const DEFAULT_SORTED_OUTPUT_FILE: &str = "DeePred-BBB_predictions_sorted.csv";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Threshold must lie strictly between 0 and 1, got {0}")]
    InvalidThreshold(f32),
    #[error("Parameter '{0}' must not be empty")]
    EmptyPath(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorConfig {
    pub java: PathBuf,
    pub padel_jar_path: PathBuf,
    pub padel_descriptors_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionConfig {
    /// Directory searched for the structure list; every asset path defaults to a location in it.
    pub working_dir: PathBuf,
    pub features_path: PathBuf,
    pub reference_data_path: PathBuf,
    pub model_path: PathBuf,
    pub descriptors: DescriptorConfig,
    /// Resolved against the process's current directory, not the working directory.
    pub output_path: PathBuf,
    pub threshold: f32,
    pub force_recompute: bool,
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    working_dir: Option<PathBuf>,
    features_path: Option<PathBuf>,
    reference_data_path: Option<PathBuf>,
    model_path: Option<PathBuf>,
    java: Option<PathBuf>,
    padel_jar_path: Option<PathBuf>,
    padel_descriptors_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    threshold: Option<f32>,
    force_recompute: Option<bool>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working_dir(mut self, path: PathBuf) -> Self {
        self.working_dir = Some(path);
        self
    }
    pub fn features_path(mut self, path: PathBuf) -> Self {
        self.features_path = Some(path);
        self
    }
    pub fn reference_data_path(mut self, path: PathBuf) -> Self {
        self.reference_data_path = Some(path);
        self
    }
    pub fn model_path(mut self, path: PathBuf) -> Self {
        self.model_path = Some(path);
        self
    }
    pub fn java(mut self, path: PathBuf) -> Self {
        self.java = Some(path);
        self
    }
    pub fn padel_jar_path(mut self, path: PathBuf) -> Self {
        self.padel_jar_path = Some(path);
        self
    }
    pub fn padel_descriptors_path(mut self, path: PathBuf) -> Self {
        self.padel_descriptors_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }
    pub fn force_recompute(mut self, force: bool) -> Self {
        self.force_recompute = Some(force);
        self
    }

    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let working_dir = self
            .working_dir
            .ok_or(ConfigError::MissingParameter("working_dir"))?;
        if working_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("working_dir"));
        }

        let threshold = self.threshold.unwrap_or(DEFAULT_THRESHOLD);
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        let asset = |path: Option<PathBuf>, default: &str, name: &'static str| {
            let path = path.unwrap_or_else(|| PathBuf::from(default));
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyPath(name));
            }
            Ok(resolve_against(&working_dir, path))
        };

        let features_path = asset(self.features_path, DEFAULT_FEATURES_FILE, "features_path")?;
        let reference_data_path = asset(
            self.reference_data_path,
            DEFAULT_REFERENCE_FILE,
            "reference_data_path",
        )?;
        let model_path = asset(self.model_path, DEFAULT_MODEL_FILE, "model_path")?;
        let padel_jar_path = asset(self.padel_jar_path, DEFAULT_PADEL_JAR, "padel_jar_path")?;
        let padel_descriptors_path = asset(
            self.padel_descriptors_path,
            DEFAULT_PADEL_DESCRIPTORS,
            "padel_descriptors_path",
        )?;

        let java = self
            .java
            .unwrap_or_else(|| PathBuf::from(crate::core::descriptors::padel::DEFAULT_JAVA));
        if java.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("java"));
        }

        let output_path = self
            .output_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
        if output_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("output_path"));
        }

        Ok(PredictionConfig {
            features_path,
            reference_data_path,
            model_path,
            descriptors: DescriptorConfig {
                java,
                padel_jar_path,
                padel_descriptors_path,
            },
            output_path,
            threshold,
            force_recompute: self.force_recompute.unwrap_or(false),
            working_dir,
        })
    }
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
