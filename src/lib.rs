//! # Septiscan
//!
//! Explainable sepsis deterioration risk scoring.
//!
//! This crate provides:
//! - A deterministic, weighted multi-channel risk scorer with an explicit
//!   confidence model for missing data
//! - Configurable threshold checks producing ordered violations
//! - Rule-driven findings, recommendations, treatment plans and follow-ups
//! - Self-consistent dashboard quality metrics for a labeled dataset
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core clinical types (records, thresholds, reports, metrics)
//! - `ports`: Trait definitions for nondeterministic collaborators
//! - `adapters`: Concrete implementations (ChaCha sampler, log sanitizer, files)
//! - `application`: Scoring pipeline and the `AnalysisService` engine
//! - `config`: Environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::AnalysisService;
pub use domain::{PatientAnalysisReport, PatientRecord, Prediction, RiskLevel};

/// Result type for Septiscan operations
pub type Result<T> = std::result::Result<T, SeptiscanError>;

/// Main error type for Septiscan
#[derive(Debug, thiserror::Error)]
pub enum SeptiscanError {
    #[error("Model not ready: {0}")]
    ModelNotReady(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid dataset: {0}")]
    Dataset(#[from] domain::DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
