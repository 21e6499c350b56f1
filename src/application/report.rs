//! Report assembler: composes every component into one report.

use crate::domain::{PatientAnalysisReport, PatientRecord, ThresholdTable};

use super::{
    FindingsGenerator, RecommendationEngine, RiskScorer, ThresholdEvaluator, UncertaintyAnalyzer,
};

/// Runs the per-patient pipeline: evaluate and score, analyze uncertainty,
/// then derive findings and recommendations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAssembler {
    evaluator: ThresholdEvaluator,
    scorer: RiskScorer,
    uncertainty: UncertaintyAnalyzer,
    findings: FindingsGenerator,
    recommendations: RecommendationEngine,
}

impl ReportAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh report for `record` against `thresholds`.
    #[must_use]
    pub fn assemble(
        &self,
        patient_id: impl Into<String>,
        record: &PatientRecord,
        thresholds: &ThresholdTable,
    ) -> PatientAnalysisReport {
        let violations = self.evaluator.evaluate(record, thresholds);
        let prediction = self.scorer.score(record);
        let uncertainty_factors = self.uncertainty.analyze(record);

        let clinical_findings = self.findings.generate(record, &violations);
        let recommendations = self
            .recommendations
            .recommendations(prediction.risk_level, &violations);
        let treatment_plan = self.recommendations.treatment_plan(prediction.risk_level);
        let follow_up_actions = self.recommendations.follow_up_actions(&uncertainty_factors);

        PatientAnalysisReport {
            patient_id: patient_id.into(),
            overall_risk: prediction.risk_level,
            confidence: prediction.confidence,
            risk_probability: prediction.probability,
            clinical_findings,
            recommendations,
            threshold_violations: violations,
            uncertainty_factors,
            treatment_plan,
            follow_up_actions,
            timestamp: chrono::Utc::now(),
        }
    }
}
