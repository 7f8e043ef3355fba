//! CSV dependency list reading
//!
//! Input format: a header row (discarded) followed by one row per dependency,
//! column 0 = `owner/repo`, column 1 = minimum version. Malformed rows are
//! skipped with a warning so one bad row never blocks the valid ones; an
//! unreadable file is an error for the whole run.

use crate::deps::types::{Dependency, RowError};
use std::path::Path;
use tracing::warn;

/// Error type for dependency list reading
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read dependency list: {0}")]
    Csv(#[from] csv::Error),
}

/// Read the dependency list at `path`.
///
/// The returned entries keep the file's row order. Rows that fail to parse
/// are logged and dropped.
pub fn read_dependency_list(path: &Path) -> Result<Vec<Dependency>, ReadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut dependencies = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header is row 1, first data row is row 2.
        let row = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {}: {}", row, e);
                continue;
            }
        };
        match parse_record(&record) {
            Ok(dependency) => dependencies.push(dependency),
            Err(e) => warn!("Skipping row {}: {}", row, e),
        }
    }
    Ok(dependencies)
}

fn parse_record(record: &csv::StringRecord) -> Result<Dependency, RowError> {
    match (record.get(0), record.get(1)) {
        (Some(repo), Some(min_version)) => Dependency::from_columns(repo, min_version),
        _ => Err(RowError::WrongColumnCount(record.len())),
    }
}
