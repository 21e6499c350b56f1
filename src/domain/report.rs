//! Patient analysis report and its building blocks.

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Severity of a threshold violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A single threshold breach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub parameter: String,
    pub value: f64,
    pub threshold: f64,
    pub severity: Severity,
}

impl Violation {
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// Reason a clinician should qualify their trust in a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UncertaintyFactor {
    #[serde(rename = "Missing lactate measurement")]
    MissingLactate,
    #[serde(rename = "Missing white blood cell count")]
    MissingWbc,
    #[serde(rename = "Missing heart rate")]
    MissingHeartRate,
    #[serde(rename = "Missing temperature")]
    MissingTemperature,
    #[serde(rename = "Borderline lactate (2.0-2.5 mmol/L)")]
    BorderlineLactate,
    #[serde(rename = "Borderline heart rate (85-95 bpm)")]
    BorderlineHeartRate,
}

impl UncertaintyFactor {
    /// The reason tag shown to clinicians.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::MissingLactate => "Missing lactate measurement",
            Self::MissingWbc => "Missing white blood cell count",
            Self::MissingHeartRate => "Missing heart rate",
            Self::MissingTemperature => "Missing temperature",
            Self::BorderlineLactate => "Borderline lactate (2.0-2.5 mmol/L)",
            Self::BorderlineHeartRate => "Borderline heart rate (85-95 bpm)",
        }
    }
}

impl std::fmt::Display for UncertaintyFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Explainable risk report for one patient.
///
/// Built once per analysis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAnalysisReport {
    pub patient_id: String,
    pub overall_risk: RiskLevel,
    pub confidence: f64,
    pub risk_probability: f64,
    pub clinical_findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub threshold_violations: Vec<Violation>,
    pub uncertainty_factors: Vec<UncertaintyFactor>,
    pub treatment_plan: Vec<String>,
    pub follow_up_actions: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
