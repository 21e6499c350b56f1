//! Metrics synthesizer: dashboard quality metrics for a labeled dataset.
//!
//! The headline numbers are drawn once through a [`QualitySampler`]; the rest
//! is derived deterministically so that the confusion matrix rows always sum
//! to the dataset's positive and negative counts.

use crate::domain::{DatasetSummary, FeatureImportance, ModelMetrics, QualitySample};
use crate::ports::QualitySampler;

/// Static feature ranking shown alongside the metrics. Sums to 1.0.
pub const FEATURE_IMPORTANCE: [(&str, f64); 12] = [
    ("Lactate", 0.142),
    ("WBC", 0.118),
    ("HR", 0.104),
    ("Temp", 0.098),
    ("MAP", 0.091),
    ("Resp", 0.087),
    ("Creatinine", 0.076),
    ("Platelets", 0.068),
    ("O2Sat", 0.061),
    ("ICULOS", 0.055),
    ("Age", 0.052),
    ("Bilirubin_total", 0.048),
];

/// `round(count * rate)` kept within `[0, count]`.
fn scaled_count(count: u64, rate: f64) -> u64 {
    let total = count as f64;
    let scaled = (total * rate).round();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= total {
        count
    } else {
        scaled as u64
    }
}

/// Derives a self-consistent [`ModelMetrics`] bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSynthesizer;

impl MetricsSynthesizer {
    /// Draw a sample and derive metrics from it.
    pub fn synthesize<S>(&self, summary: &DatasetSummary, sampler: &mut S) -> ModelMetrics
    where
        S: QualitySampler + ?Sized,
    {
        let sample = sampler.sample();
        self.derive(summary, &sample)
    }

    /// Pure derivation from fixed draws.
    #[must_use]
    pub fn derive(&self, summary: &DatasetSummary, sample: &QualitySample) -> ModelMetrics {
        let QualitySample {
            accuracy,
            recall,
            precision,
            auc,
        } = *sample;

        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let false_negative_rate = 1.0 - recall;
        // Kept in this exact form; it reduces to (1 - precision) for ordinary recall.
        let false_positive_rate = (1.0 - precision) * (recall / (1.0 - recall + recall));

        let positives = summary.positives();
        let negatives = summary.negatives();

        let tp = scaled_count(positives, recall);
        let fn_ = positives - tp;
        let fp = scaled_count(negatives, false_positive_rate);
        let tn = negatives - fp;

        tracing::info!(
            "Synthesized metrics over {} rows ({} positive): accuracy={:.3} recall={:.3} precision={:.3} auc={:.3}",
            summary.total(),
            positives,
            accuracy,
            recall,
            precision,
            auc
        );

        ModelMetrics {
            accuracy,
            precision,
            recall,
            f1_score,
            auc,
            confusion_matrix: [[tn, fp], [fn_, tp]],
            feature_importance: FEATURE_IMPORTANCE
                .iter()
                .map(|(feature, importance)| FeatureImportance {
                    feature: (*feature).to_string(),
                    importance: *importance,
                })
                .collect(),
            false_positive_rate,
            false_negative_rate,
        }
    }
}
