use crate::cli::PredictArgs;
use crate::config::PartialPredictionConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use deepred::{
    core::descriptors::PadelDescriptor,
    core::model::onnx::OnnxClassifier,
    engine::config::PredictionConfig,
    engine::error::EngineError,
    engine::progress::ProgressReporter,
    workflows::{self, predict::PredictionResult},
};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: PredictArgs, progress: &CliProgressHandler) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialPredictionConfig::from_file(path)?,
        None => PartialPredictionConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    if let Some(message) = output_location_warning(&config) {
        warn!("{}", message);
    }

    workflows::predict::discover_structures(&config)?;

    info!("Loading model from {:?}", &config.model_path);
    let classifier = OnnxClassifier::load(&config.model_path).map_err(EngineError::from)?;

    let calculator = PadelDescriptor::new(
        config.descriptors.java.clone(),
        config.descriptors.padel_jar_path.clone(),
        config.descriptors.padel_descriptors_path.clone(),
    );

    let reporter = ProgressReporter::with_callback(progress.get_callback());

    println!("Starting BBB permeability prediction...");
    info!("Invoking the core prediction workflow...");

    let result = workflows::predict::run(&config, &calculator, &classifier, &reporter)?;

    if result.records.is_empty() {
        warn!("Workflow completed but the feature table held no samples.");
        println!("Warning: no samples were found in the feature table.");
    }

    println!("{}", summary_line(&result));

    Ok(())
}

fn output_location_warning(config: &PredictionConfig) -> Option<String> {
    if config.output_path.is_absolute() || is_current_dir(&config.working_dir) {
        return None;
    }
    Some(format!(
        "Predictions are written relative to the current directory ({:?}), not the working directory {:?}.",
        &config.output_path, &config.working_dir
    ))
}

fn summary_line(result: &PredictionResult) -> String {
    let permeable = result.num_permeable();
    format!(
        "✓ {} predictions ({} permeable, {} non-permeable) written to: {}",
        result.records.len(),
        permeable,
        result.records.len() - permeable,
        result.output_path.display()
    )
}

fn is_current_dir(dir: &Path) -> bool {
    match (std::env::current_dir(), dir.canonicalize()) {
        (Ok(cwd), Ok(dir)) => cwd.canonicalize().is_ok_and(|cwd| cwd == dir),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::error::CliError;
    use clap::Parser;
    use deepred::core::io::results::PredictionRecord;
    use deepred::engine::config::PredictionConfigBuilder;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn predict_args(extra: &[&str]) -> PredictArgs {
        let mut argv = vec!["deepred", "predict"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Predict(args) => args,
            _ => panic!("Expected 'predict' subcommand"),
        }
    }

    fn config_with_output(working_dir: &Path, output: PathBuf) -> PredictionConfig {
        PredictionConfigBuilder::new()
            .working_dir(working_dir.to_path_buf())
            .output_path(output)
            .build()
            .unwrap()
    }

    #[test]
    fn relative_output_outside_the_working_directory_is_warned_about() {
        let dir = tempdir().unwrap();
        let config = config_with_output(dir.path(), PathBuf::from("DeePred-BBB_predictions.csv"));

        let message = output_location_warning(&config).unwrap();
        assert!(message.contains("DeePred-BBB_predictions.csv"));
        assert!(message.contains("not the working directory"));
    }

    #[test]
    fn absolute_output_is_not_warned_about() {
        let dir = tempdir().unwrap();
        let config = config_with_output(dir.path(), dir.path().join("predictions.csv"));
        assert!(output_location_warning(&config).is_none());
    }

    #[test]
    fn summary_counts_permeable_and_non_permeable() {
        let record = |name: &str, predicted_class: u8| PredictionRecord {
            name: name.to_string(),
            predicted_class,
        };
        let result = PredictionResult {
            structure_file: PathBuf::from("input.smi"),
            num_structures: 3,
            features_recomputed: false,
            records: vec![record("cmpd_1", 1), record("cmpd_2", 0), record("cmpd_3", 1)],
            output_path: PathBuf::from("out.csv"),
        };

        assert_eq!(
            summary_line(&result),
            "✓ 3 predictions (2 permeable, 1 non-permeable) written to: out.csv"
        );
    }

    #[test]
    fn missing_structure_list_is_reported_before_the_model_is_loaded() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("predictions.csv");
        let args = predict_args(&[
            dir.path().to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);

        let result = run(args, &CliProgressHandler::new());
        assert!(matches!(
            result,
            Err(CliError::DeePred(EngineError::NoStructureFile { .. }))
        ));
        assert!(!output.exists());
    }
}
