//! Model quality metrics shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Raw quality draws before any derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitySample {
    pub accuracy: f64,
    pub recall: f64,
    pub precision: f64,
    pub auc: f64,
}

/// Relative importance of one clinical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Quality metric bundle with a row-consistent confusion matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc: f64,
    /// `[[tn, fp], [fn, tp]]`
    pub confusion_matrix: [[u64; 2]; 2],
    pub feature_importance: Vec<FeatureImportance>,
    pub false_positive_rate: f64,
    pub false_negative_rate: f64,
}

impl ModelMetrics {
    #[must_use]
    pub fn true_negatives(&self) -> u64 {
        self.confusion_matrix[0][0]
    }

    #[must_use]
    pub fn false_positives(&self) -> u64 {
        self.confusion_matrix[0][1]
    }

    #[must_use]
    pub fn false_negatives(&self) -> u64 {
        self.confusion_matrix[1][0]
    }

    #[must_use]
    pub fn true_positives(&self) -> u64 {
        self.confusion_matrix[1][1]
    }
}
