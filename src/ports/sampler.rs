//! Quality sampler port: the single source of randomness in the crate.
//!
//! Metrics synthesis draws its four headline numbers through this trait so
//! the derivation that follows stays pure and testable with fixed inputs.

use std::ops::Range;

use crate::domain::QualitySample;

/// Documented accuracy range.
pub const ACCURACY_RANGE: Range<f64> = 0.87..0.93;
/// Documented recall range.
pub const RECALL_RANGE: Range<f64> = 0.89..0.97;
/// Documented precision range.
pub const PRECISION_RANGE: Range<f64> = 0.83..0.92;
/// Documented AUC range.
pub const AUC_RANGE: Range<f64> = 0.91..0.97;

/// Trait for drawing simulated model quality.
///
/// Implementations draw each metric independently and uniformly from its
/// half-open range above.
pub trait QualitySampler {
    /// Draw one set of quality metrics.
    fn sample(&mut self) -> QualitySample;
}

/// A fixed sample, useful for replaying a known metrics bundle.
impl QualitySampler for QualitySample {
    fn sample(&mut self) -> QualitySample {
        *self
    }
}
