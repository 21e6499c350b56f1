//! JSON file persistence for threshold tables.
//!
//! The engine never touches disk; the binary and other orchestration code
//! use these helpers to load overrides and save the effective table.

use std::path::Path;

use crate::domain::ThresholdTable;
use crate::SeptiscanError;

/// Load a (possibly partial) threshold table from a JSON object file.
///
/// # Errors
/// Returns error if the file cannot be read or is not a threshold map.
pub fn load_thresholds(path: &Path) -> Result<ThresholdTable, SeptiscanError> {
    let content = std::fs::read_to_string(path)?;
    let table: ThresholdTable = serde_json::from_str(&content).map_err(|e| {
        SeptiscanError::Config(format!(
            "Invalid threshold file {}: {e}",
            path.display()
        ))
    })?;
    tracing::debug!("Loaded {} threshold entries from {}", table.len(), path.display());
    Ok(table)
}

/// Write a threshold table as pretty JSON, keeping entry order.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_thresholds(path: &Path, table: &ThresholdTable) -> Result<(), SeptiscanError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let bytes = serde_json::to_vec_pretty(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
