use super::{DescriptorCalculator, DescriptorError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, instrument};

pub const DEFAULT_JAVA: &str = "java";

/// Fixed PaDEL flags: 2D descriptors, fingerprints, salt removal, aromaticity detection,
/// and nitro-group standardization.
const PADEL_FLAGS: [&str; 5] = [
    "-2d",
    "-fingerprints",
    "-removesalt",
    "-detectaromaticity",
    "-standardizenitro",
];

/// PaDEL-Descriptor launched as `java -jar PaDEL-Descriptor.jar ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct PadelDescriptor {
    java: PathBuf,
    jar_path: PathBuf,
    descriptor_types_path: PathBuf,
}

impl PadelDescriptor {
    pub fn new(java: PathBuf, jar_path: PathBuf, descriptor_types_path: PathBuf) -> Self {
        Self {
            java,
            jar_path,
            descriptor_types_path,
        }
    }

    pub fn command(&self, input_dir: &Path, output_path: &Path) -> Command {
        let mut command = Command::new(&self.java);
        command
            .arg("-jar")
            .arg(&self.jar_path)
            .arg("-descriptortypes")
            .arg(&self.descriptor_types_path)
            .arg("-dir")
            .arg(input_dir)
            .arg("-file")
            .arg(output_path)
            .args(PADEL_FLAGS);
        command
    }

    fn ensure_resources(&self) -> Result<(), DescriptorError> {
        for path in [&self.jar_path, &self.descriptor_types_path] {
            if !path.is_file() {
                return Err(DescriptorError::MissingResource { path: path.clone() });
            }
        }
        Ok(())
    }
}

impl DescriptorCalculator for PadelDescriptor {
    #[instrument(skip_all, name = "padel")]
    fn calculate(&self, input_dir: &Path, output_path: &Path) -> Result<(), DescriptorError> {
        self.ensure_resources()?;

        let mut command = self.command(input_dir, output_path);
        debug!("Launching descriptor tool: {:?}", command);
        info!("Calculating PaDEL features for structures in {:?}", input_dir);

        let status = command.status().map_err(|e| DescriptorError::Spawn {
            program: self.java.to_string_lossy().to_string(),
            source: e,
        })?;
        if !status.success() {
            return Err(DescriptorError::ExitStatus { status });
        }

        info!("Features written to {:?}", output_path);
        Ok(())
    }
}
