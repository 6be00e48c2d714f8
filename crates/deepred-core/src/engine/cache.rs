//! Decides whether a previously computed descriptor table can be reused.
//!
//! The check never fails: every way a cached table can be unusable maps to an explicit
//! [`RecomputeReason`], so callers can log exactly why descriptors are being recalculated.

use crate::core::io::TableError;
use crate::core::io::features::count_rows;
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum CacheStatus {
    Reuse { rows: usize },
    Recompute(RecomputeReason),
}

#[derive(Debug)]
pub enum RecomputeReason {
    Forced,
    Missing,
    Unreadable(TableError),
    RowCountMismatch { expected: usize, found: usize },
}

impl CacheStatus {
    pub fn needs_recompute(&self) -> bool {
        matches!(self, CacheStatus::Recompute(_))
    }
}

impl fmt::Display for RecomputeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomputeReason::Forced => write!(f, "recomputation was requested"),
            RecomputeReason::Missing => write!(f, "no feature file exists yet"),
            RecomputeReason::Unreadable(e) => write!(f, "existing feature file is unreadable: {}", e),
            RecomputeReason::RowCountMismatch { expected, found } => write!(
                f,
                "existing feature file has {} rows but {} structures were given",
                found, expected
            ),
        }
    }
}

pub fn check_feature_cache(path: &Path, expected_rows: usize) -> CacheStatus {
    if !path.exists() {
        return CacheStatus::Recompute(RecomputeReason::Missing);
    }

    let status = match count_rows(path) {
        Err(e) => CacheStatus::Recompute(RecomputeReason::Unreadable(e)),
        Ok(found) if found != expected_rows => {
            CacheStatus::Recompute(RecomputeReason::RowCountMismatch {
                expected: expected_rows,
                found,
            })
        }
        Ok(rows) => CacheStatus::Reuse { rows },
    };
    debug!("Feature cache check for {:?}: {:?}", path, status);
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn matching_row_count_is_reused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PaDEL_features.csv");
        fs::write(&path, "Name,a,b\nm1,1,2\nm2,3,4\nm3,5,6\n").unwrap();

        let status = check_feature_cache(&path, 3);
        assert!(matches!(status, CacheStatus::Reuse { rows: 3 }));
        assert!(!status.needs_recompute());
    }

    #[test]
    fn absent_file_is_recomputed() {
        let dir = tempdir().unwrap();
        let status = check_feature_cache(&dir.path().join("PaDEL_features.csv"), 3);
        assert!(matches!(
            status,
            CacheStatus::Recompute(RecomputeReason::Missing)
        ));
    }

    #[test]
    fn row_count_mismatch_is_recomputed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PaDEL_features.csv");
        fs::write(&path, "Name,a\nm1,1\nm2,2\n").unwrap();

        let status = check_feature_cache(&path, 3);
        assert!(matches!(
            status,
            CacheStatus::Recompute(RecomputeReason::RowCountMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn empty_or_malformed_file_is_recomputed() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        assert!(matches!(
            check_feature_cache(&empty, 0),
            CacheStatus::Recompute(RecomputeReason::Unreadable(_))
        ));

        let ragged = dir.path().join("ragged.csv");
        fs::write(&ragged, "Name,a,b\nm1,1,2\nm2\n").unwrap();
        assert!(matches!(
            check_feature_cache(&ragged, 2),
            CacheStatus::Recompute(RecomputeReason::Unreadable(_))
        ));
    }

    #[test]
    fn reasons_are_human_readable() {
        let reason = RecomputeReason::RowCountMismatch {
            expected: 5,
            found: 4,
        };
        assert_eq!(
            reason.to_string(),
            "existing feature file has 4 rows but 5 structures were given"
        );
    }
}
