//! Discovery and inspection of SMILES structure-list files.

use super::TableError;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STRUCTURE_FILE_EXTENSION: &str = "smi";

/// Lists every `*.smi` file directly inside `dir`, sorted by file name.
///
/// Sorting makes the selection reproducible regardless of the order in which the
/// filesystem returns directory entries.
pub fn list_structure_files(dir: &Path) -> Result<Vec<PathBuf>, TableError> {
    let entries = fs::read_dir(dir).map_err(|e| TableError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| TableError::io(dir, e))?.path();
        let is_structure_file = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == STRUCTURE_FILE_EXTENSION);
        if is_structure_file {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Picks the structure-list file to use for a run.
///
/// When several candidates exist, the first in file-name order wins and the others are
/// reported in a warning. Returns `Ok(None)` when the directory holds no `*.smi` file.
pub fn find_structure_file(dir: &Path) -> Result<Option<PathBuf>, TableError> {
    let mut files = list_structure_files(dir)?;
    if files.len() > 1 {
        warn!(
            "Found {} structure files in {:?}; using {:?} and ignoring {:?}",
            files.len(),
            dir,
            files[0],
            &files[1..]
        );
    }
    if files.is_empty() {
        return Ok(None);
    }
    Ok(Some(files.swap_remove(0)))
}

/// Counts the structures in a SMILES file, i.e. its non-blank lines.
pub fn count_structures(path: &Path) -> Result<usize, TableError> {
    let file = File::open(path).map_err(|e| TableError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut count = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| TableError::io(path, e))?;
        if !line.trim().is_empty() {
            count += 1;
        }
    }
    debug!("Counted {} structures in {:?}", count, path);
    Ok(count)
}
