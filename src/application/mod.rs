//! Application layer: the scoring pipeline and the engine service.
//!
//! Leaf components are stateless unit structs; [`AnalysisService`] owns the
//! threshold registry and the model state and drives them.

mod analysis;
mod evaluator;
mod findings;
mod metrics;
mod recommendations;
mod registry;
mod report;
mod scorer;
mod uncertainty;

pub use analysis::{AnalysisService, ModelState, TrainedModel};
pub use evaluator::ThresholdEvaluator;
pub use findings::FindingsGenerator;
pub use metrics::{MetricsSynthesizer, FEATURE_IMPORTANCE};
pub use recommendations::RecommendationEngine;
pub use registry::ThresholdRegistry;
pub use report::ReportAssembler;
pub use scorer::{
    classify, Contribution, RiskScorer, ScoreBreakdown, BASE_CONFIDENCE, MAX_CONFIDENCE,
    MIN_CONFIDENCE,
};
pub use uncertainty::UncertaintyAnalyzer;
