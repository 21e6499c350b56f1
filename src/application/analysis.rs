//! Analysis service: the engine facade.
//!
//! This service owns:
//! - The threshold registry (the only externally mutable configuration)
//! - The model state, which gates analysis until metrics are synthesized
//!
//! All state lives in the service value; there is no module-level state.

use crate::domain::{
    DatasetSummary, ModelMetrics, PatientAnalysisReport, PatientRecord, ThresholdTable,
};
use crate::ports::QualitySampler;
use crate::SeptiscanError;

use super::{MetricsSynthesizer, ReportAssembler, ThresholdRegistry};

/// Outcome of a completed training step.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel {
    pub metrics: ModelMetrics,
    pub summary: DatasetSummary,
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

/// Whether the engine may analyze patients yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelState {
    #[default]
    Untrained,
    Ready(TrainedModel),
}

/// Service for sepsis risk analysis.
///
/// # Concurrency
///
/// `analyze` takes `&self` and mutates nothing, so a shared service can score
/// patients from many threads. `train` and `update_thresholds` take
/// `&mut self`; wrap the service in a lock if those must run concurrently.
#[derive(Debug, Clone, Default)]
pub struct AnalysisService {
    registry: ThresholdRegistry,
    assembler: ReportAssembler,
    synthesizer: MetricsSynthesizer,
    state: ModelState,
}

impl AnalysisService {
    /// Create an untrained service with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an untrained service with a custom threshold table.
    #[must_use]
    pub fn with_thresholds(table: ThresholdTable) -> Self {
        Self {
            registry: ThresholdRegistry::with_table(table),
            ..Self::default()
        }
    }

    /// Synthesize quality metrics for `summary` and mark the model ready.
    ///
    /// Re-training replaces the previous model.
    pub fn train<S>(&mut self, summary: DatasetSummary, sampler: &mut S) -> ModelMetrics
    where
        S: QualitySampler + ?Sized,
    {
        tracing::info!(
            "Training on {} rows ({} positive, {} patients, {} features)",
            summary.total(),
            summary.positives(),
            summary.patient_count,
            summary.feature_names.len()
        );

        let metrics = self.synthesizer.synthesize(&summary, sampler);
        self.state = ModelState::Ready(TrainedModel {
            metrics: metrics.clone(),
            summary,
            trained_at: chrono::Utc::now(),
        });

        tracing::info!("Model ready");
        metrics
    }

    /// Check if the model is ready for analysis.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ModelState::Ready(_))
    }

    #[must_use]
    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Metrics of the trained model, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&ModelMetrics> {
        match &self.state {
            ModelState::Ready(model) => Some(&model.metrics),
            ModelState::Untrained => None,
        }
    }

    /// Display feature names of the training dataset (empty until trained).
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        match &self.state {
            ModelState::Ready(model) => &model.summary.feature_names,
            ModelState::Untrained => &[],
        }
    }

    /// Current threshold table.
    #[must_use]
    pub fn thresholds(&self) -> &ThresholdTable {
        self.registry.get()
    }

    /// Overwrite the entries named in `partial`.
    pub fn update_thresholds(&mut self, partial: ThresholdTable) {
        self.registry.update(partial);
    }

    /// Analyze one patient record.
    ///
    /// # Errors
    /// Returns `ModelNotReady` if called before [`AnalysisService::train`].
    pub fn analyze(
        &self,
        record: &PatientRecord,
        patient_id: impl Into<String>,
    ) -> Result<PatientAnalysisReport, SeptiscanError> {
        if !self.is_ready() {
            tracing::warn!("Analysis requested before training completed");
            return Err(SeptiscanError::ModelNotReady(
                "train the model before analyzing patients".to_string(),
            ));
        }

        let report = self
            .assembler
            .assemble(patient_id, record, self.registry.get());

        tracing::info!(
            "Analysis complete: risk={} ({}), probability={:.2}, confidence={:.2}%, violations={}, uncertainty_factors={}",
            report.overall_risk,
            report.overall_risk.description(),
            report.risk_probability,
            report.confidence * 100.0,
            report.threshold_violations.len(),
            report.uncertainty_factors.len()
        );

        Ok(report)
    }
}
