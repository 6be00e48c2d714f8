use clap::{Args, Parser, Subcommand};
use deepred::engine::config::{DEFAULT_OUTPUT_FILE, DEFAULT_SORTED_OUTPUT_FILE};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Freddy Bernal",
    version,
    about = "DeePred-BBB - Blood-brain-barrier permeability prediction from PaDEL descriptors with a pretrained deep neural network.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict BBB permeability for the structures in a working directory's '.smi' file.
    Predict(PredictArgs),
    /// Sort a predictions CSV by the number at the end of each compound name.
    Sort(SortArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Working directory holding the '.smi' file, 'data.csv', the model and PaDEL-Descriptor.
    /// Defaults to the current directory.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the predictions CSV, relative to the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Recalculate PaDEL features even if a matching feature file exists.
    #[arg(long)]
    pub recompute: bool,

    /// Java executable used to run PaDEL-Descriptor.
    #[arg(long, value_name = "PATH")]
    pub java: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S prediction.threshold=0.6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `sort` subcommand.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Predictions CSV to sort.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub input: PathBuf,

    /// Path for the sorted CSV.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_SORTED_OUTPUT_FILE)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_accepts_optional_working_directory() {
        let cli = Cli::parse_from(["deepred", "predict"]);
        match cli.command {
            Commands::Predict(args) => assert!(args.path.is_none()),
            _ => panic!("Expected 'predict' subcommand"),
        }

        let cli = Cli::parse_from(["deepred", "-v", "predict", "/data/run", "--recompute"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(args.path, Some(PathBuf::from("/data/run")));
                assert!(args.recompute);
            }
            _ => panic!("Expected 'predict' subcommand"),
        }
    }

    #[test]
    fn set_values_do_not_swallow_the_working_directory() {
        let cli = Cli::parse_from([
            "deepred",
            "predict",
            "-S",
            "prediction.threshold=0.6",
            "/data/run",
            "--set",
            "descriptors.java=/opt/java/bin/java",
        ]);
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(args.path, Some(PathBuf::from("/data/run")));
                assert_eq!(
                    args.set_values,
                    vec![
                        "prediction.threshold=0.6".to_string(),
                        "descriptors.java=/opt/java/bin/java".to_string()
                    ]
                );
            }
            _ => panic!("Expected 'predict' subcommand"),
        }
    }

    #[test]
    fn sort_defaults_to_prediction_file_names() {
        let cli = Cli::parse_from(["deepred", "sort"]);
        match cli.command {
            Commands::Sort(args) => {
                assert_eq!(args.input, PathBuf::from("DeePred-BBB_predictions.csv"));
                assert_eq!(
                    args.output,
                    PathBuf::from("DeePred-BBB_predictions_sorted.csv")
                );
            }
            _ => panic!("Expected 'sort' subcommand"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["deepred", "-q", "-v", "sort"]);
        assert!(result.is_err());
    }
}
