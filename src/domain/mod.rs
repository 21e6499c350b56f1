//! Domain layer: Core clinical types.
//!
//! Pure data types with no I/O. Everything here is serializable so the
//! orchestration layer can persist or render it.

mod dataset;
mod metrics;
mod patient;
mod prediction;
mod report;
mod thresholds;

pub use dataset::{DatasetError, DatasetRow, DatasetSummary, LABEL_COLUMNS, PATIENT_ID_COLUMNS};
pub use metrics::{FeatureImportance, ModelMetrics, QualitySample};
pub use patient::{Labs, PatientRecord, Vitals};
pub use prediction::{Prediction, RiskLevel};
pub use report::{PatientAnalysisReport, Severity, UncertaintyFactor, Violation};
pub use thresholds::{CriticalDirection, ParameterThreshold, ThresholdTable};
