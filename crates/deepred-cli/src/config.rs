use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use deepred::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAssetsConfig {
    #[serde(rename = "reference-data")]
    reference_data: Option<PathBuf>,
    model: Option<PathBuf>,
    #[serde(rename = "padel-jar")]
    padel_jar: Option<PathBuf>,
    #[serde(rename = "padel-descriptors")]
    padel_descriptors: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialFeaturesConfig {
    #[serde(rename = "file-name")]
    file_name: Option<PathBuf>,
    #[serde(rename = "force-recompute")]
    force_recompute: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDescriptorsConfig {
    java: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    threshold: Option<f32>,
    output: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialPredictionConfig {
    assets: Option<PartialAssetsConfig>,
    features: Option<PartialFeaturesConfig>,
    descriptors: Option<PartialDescriptorsConfig>,
    prediction: Option<PartialOutputConfig>,
}

impl PartialPredictionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &PredictArgs) -> Result<core_config::PredictionConfig> {
        self.apply_set_values(&args.set_values)?;

        let assets = self.assets.take().unwrap_or_default();
        let features = self.features.take().unwrap_or_default();
        let descriptors = self.descriptors.take().unwrap_or_default();
        let prediction = self.prediction.take().unwrap_or_default();

        let working_dir = match &args.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        if !working_dir.is_dir() {
            return Err(CliError::Argument(format!(
                "Working directory does not exist: {}",
                working_dir.display()
            )));
        }

        let mut builder = core_config::PredictionConfigBuilder::new()
            .working_dir(working_dir)
            .force_recompute(args.recompute || features.force_recompute.unwrap_or(false));

        if let Some(path) = assets.reference_data {
            builder = builder.reference_data_path(path);
        }
        if let Some(path) = assets.model {
            builder = builder.model_path(path);
        }
        if let Some(path) = assets.padel_jar {
            builder = builder.padel_jar_path(path);
        }
        if let Some(path) = assets.padel_descriptors {
            builder = builder.padel_descriptors_path(path);
        }
        if let Some(path) = features.file_name {
            builder = builder.features_path(path);
        }
        if let Some(java) = args.java.clone().or(descriptors.java) {
            builder = builder.java(java);
        }
        if let Some(threshold) = prediction.threshold {
            builder = builder.threshold(threshold);
        }
        if let Some(output) = args.output.clone().or(prediction.output) {
            builder = builder.output_path(output);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Argument(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "assets.reference-data" => {
                    self.assets
                        .get_or_insert_with(Default::default)
                        .reference_data = Some(PathBuf::from(value_str));
                }
                "assets.model" => {
                    self.assets.get_or_insert_with(Default::default).model =
                        Some(PathBuf::from(value_str));
                }
                "assets.padel-jar" => {
                    self.assets.get_or_insert_with(Default::default).padel_jar =
                        Some(PathBuf::from(value_str));
                }
                "assets.padel-descriptors" => {
                    self.assets
                        .get_or_insert_with(Default::default)
                        .padel_descriptors = Some(PathBuf::from(value_str));
                }
                "features.file-name" => {
                    self.features.get_or_insert_with(Default::default).file_name =
                        Some(PathBuf::from(value_str));
                }
                "features.force-recompute" => {
                    self.features
                        .get_or_insert_with(Default::default)
                        .force_recompute = Some(value_str.parse().map_err(|_| {
                        CliError::Argument(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "descriptors.java" => {
                    self.descriptors.get_or_insert_with(Default::default).java =
                        Some(PathBuf::from(value_str));
                }
                "prediction.threshold" => {
                    self.prediction
                        .get_or_insert_with(Default::default)
                        .threshold = Some(value_str.parse().map_err(|_| {
                        CliError::Argument(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                "prediction.output" => {
                    self.prediction.get_or_insert_with(Default::default).output =
                        Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Argument(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
