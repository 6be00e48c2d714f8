use crate::core::descriptors::DescriptorCalculator;
use crate::core::io::features::FeatureTable;
use crate::core::io::reference::read_reference_data;
use crate::core::io::results::{PredictionRecord, write_predictions};
use crate::core::io::structures::{count_structures, find_structure_file};
use crate::core::model::Classifier;
use crate::engine::cache::{CacheStatus, RecomputeReason, check_feature_cache};
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use crate::engine::predictor::Predictor;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub structure_file: PathBuf,
    pub num_structures: usize,
    pub features_recomputed: bool,
    pub records: Vec<PredictionRecord>,
    pub output_path: PathBuf,
}

impl PredictionResult {
    pub fn num_permeable(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.predicted_class == 1)
            .count()
    }
}

/// Finds the structure list in the working directory and counts its non-blank lines.
///
/// A missing list is fatal, so callers may run this before any expensive setup.
pub fn discover_structures(config: &PredictionConfig) -> Result<(PathBuf, usize), EngineError> {
    let structure_file = find_structure_file(&config.working_dir)?.ok_or_else(|| {
        EngineError::NoStructureFile {
            dir: config.working_dir.clone(),
        }
    })?;
    let num_structures = count_structures(&structure_file)?;
    info!(
        "Found {} structures in {:?}",
        num_structures, &structure_file
    );
    Ok((structure_file, num_structures))
}

#[instrument(skip_all, name = "prediction_workflow")]
pub fn run<D, C>(
    config: &PredictionConfig,
    calculator: &D,
    classifier: &C,
    reporter: &ProgressReporter,
) -> Result<PredictionResult, EngineError>
where
    D: DescriptorCalculator + ?Sized,
    C: Classifier + ?Sized,
{
    // === Phase 0: Locate and count the input structures ===
    reporter.report(Progress::PhaseStart {
        name: "Input discovery",
    });
    let (structure_file, num_structures) = discover_structures(config)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Reuse or recompute descriptors ===
    reporter.report(Progress::PhaseStart {
        name: "Feature cache",
    });
    let status = if config.force_recompute {
        CacheStatus::Recompute(RecomputeReason::Forced)
    } else {
        check_feature_cache(&config.features_path, num_structures)
    };
    reporter.report(Progress::PhaseFinish);

    let features_recomputed = status.needs_recompute();
    match status {
        CacheStatus::Reuse { rows } => {
            info!(
                "Found existing {:?} with matching size ({} rows). Skipping PaDEL calculation.",
                &config.features_path, rows
            );
            reporter.report(Progress::Message(
                "Reusing previously calculated features".to_string(),
            ));
        }
        CacheStatus::Recompute(reason) => {
            info!("Recalculating features: {}", reason);
            reporter.report(Progress::PhaseStart {
                name: "Descriptor calculation",
            });
            calculator.calculate(&config.working_dir, &config.features_path)?;
            reporter.report(Progress::PhaseFinish);
        }
    }

    let features = FeatureTable::read_from_path(&config.features_path)?;
    if features.num_samples() != num_structures {
        warn!(
            "Feature table has {} rows but {} structures were given; some structures may have failed descriptor calculation",
            features.num_samples(),
            num_structures
        );
    }

    // === Phase 2: Fit the scaler on the reference data ===
    reporter.report(Progress::PhaseStart { name: "Scaling" });
    let reference = read_reference_data(&config.reference_data_path)?;
    let predictor = Predictor::new(reference.view(), classifier, config.threshold)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Classify ===
    reporter.report(Progress::PhaseStart { name: "Prediction" });
    let classes = predictor.predict(&features)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Write results ===
    reporter.report(Progress::PhaseStart {
        name: "Writing results",
    });
    let records: Vec<PredictionRecord> = features
        .names
        .into_iter()
        .zip(classes)
        .map(|(name, class)| {
            debug!("{}: {}", name, class);
            PredictionRecord {
                name,
                predicted_class: class.label(),
            }
        })
        .collect();
    write_predictions(&config.output_path, &records)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Wrote {} predictions to {:?}",
        records.len(),
        &config.output_path
    );

    Ok(PredictionResult {
        structure_file,
        num_structures,
        features_recomputed,
        records,
        output_path: config.output_path.clone(),
    })
}
