//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the scoring engine and anything nondeterministic.

mod sampler;

pub use sampler::{QualitySampler, ACCURACY_RANGE, AUC_RANGE, PRECISION_RANGE, RECALL_RANGE};
