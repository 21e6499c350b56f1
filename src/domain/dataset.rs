//! Labeled dataset summary at the ingestion boundary.
//!
//! Parsing uploaded files happens elsewhere; this module only inspects
//! already-parsed rows (column name → JSON value) for the label and
//! patient-id columns and counts what metrics synthesis needs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column names accepted for the sepsis label.
pub const LABEL_COLUMNS: [&str; 2] = ["SepsisLabel", "sepsislabel"];

/// Column names accepted for the patient identifier.
pub const PATIENT_ID_COLUMNS: [&str; 3] = ["Patient_ID", "PatientID", "patient_id"];

/// One parsed dataset row.
pub type DatasetRow = Map<String, Value>;

/// Errors raised when a dataset summary is inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("positive count {positives} exceeds total row count {total}")]
    PositivesExceedTotal { total: u64, positives: u64 },
}

/// Row and label counts of a labeled dataset.
///
/// Deserialization goes through [`DatasetSummary::new`], so a stored summary
/// with more positives than rows is rejected instead of accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSummary")]
pub struct DatasetSummary {
    total: u64,
    positives: u64,
    /// Distinct patient identifiers (0 when no id column exists)
    pub patient_count: u64,
    /// Column names minus label and id columns, for display only
    pub feature_names: Vec<String>,
}

#[derive(Deserialize)]
struct RawSummary {
    total: u64,
    positives: u64,
    #[serde(default)]
    patient_count: u64,
    #[serde(default)]
    feature_names: Vec<String>,
}

impl TryFrom<RawSummary> for DatasetSummary {
    type Error = DatasetError;

    fn try_from(raw: RawSummary) -> Result<Self, Self::Error> {
        let mut summary = Self::new(raw.total, raw.positives)?;
        summary.patient_count = raw.patient_count;
        summary.feature_names = raw.feature_names;
        Ok(summary)
    }
}

impl DatasetSummary {
    /// Summary from raw counts.
    ///
    /// # Errors
    /// Returns [`DatasetError::PositivesExceedTotal`] if `positives > total`;
    /// `?` lifts it into `SeptiscanError::Dataset`.
    pub fn new(total: u64, positives: u64) -> Result<Self, DatasetError> {
        if positives > total {
            return Err(DatasetError::PositivesExceedTotal { total, positives });
        }
        Ok(Self {
            total,
            positives,
            patient_count: 0,
            feature_names: Vec::new(),
        })
    }

    /// Inspect parsed rows for labels, patient ids and feature columns.
    #[must_use]
    pub fn from_rows(rows: &[DatasetRow]) -> Self {
        let mut positives = 0u64;
        let mut patients = HashSet::new();
        let mut feature_names: Vec<String> = Vec::new();
        let mut seen_columns = HashSet::new();

        for row in rows {
            if LABEL_COLUMNS
                .iter()
                .find_map(|column| row.get(*column))
                .is_some_and(is_positive_label)
            {
                positives += 1;
            }

            if let Some(id) = PATIENT_ID_COLUMNS.iter().find_map(|column| row.get(*column)) {
                patients.insert(id_key(id));
            }

            for column in row.keys() {
                if is_reserved_column(column) || !seen_columns.insert(column.clone()) {
                    continue;
                }
                feature_names.push(column.clone());
            }
        }

        Self {
            total: rows.len() as u64,
            positives,
            patient_count: patients.len() as u64,
            feature_names,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn positives(&self) -> u64 {
        self.positives
    }

    #[must_use]
    pub fn negatives(&self) -> u64 {
        self.total.saturating_sub(self.positives)
    }

    /// Fraction of positive rows, 0 for an empty dataset.
    #[must_use]
    pub fn positive_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.positives as f64 / self.total as f64
        }
    }
}

fn is_reserved_column(column: &str) -> bool {
    LABEL_COLUMNS.contains(&column) || PATIENT_ID_COLUMNS.contains(&column)
}

fn is_positive_label(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::Bool(b) => *b,
        Value::String(s) => s.trim() == "1",
        _ => false,
    }
}

fn id_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
