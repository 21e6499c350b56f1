//! Engine configuration from the environment.
//!
//! Supported:
//! - SEPTISCAN_THRESHOLDS_FILE: JSON threshold overrides applied on top of
//!   the clinical defaults
//! - SEPTISCAN_METRICS_SEED: u64 seed for metrics sampling
//!
//! Unusable values are ignored with a warning and the default is kept.

use std::path::PathBuf;

use crate::adapters::threshold_file::load_thresholds;
use crate::adapters::ChaChaQualitySampler;
use crate::application::AnalysisService;
use crate::SeptiscanError;

pub const THRESHOLDS_FILE_ENV: &str = "SEPTISCAN_THRESHOLDS_FILE";
pub const METRICS_SEED_ENV: &str = "SEPTISCAN_METRICS_SEED";

/// Settings for building an [`AnalysisService`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Threshold overrides file, if any
    pub thresholds_file: Option<PathBuf>,

    /// Seed for the metrics sampler; `None` means OS entropy
    pub metrics_seed: Option<u64>,
}

impl EngineConfig {
    /// Load config overrides from the process environment (best-effort).
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = lookup(THRESHOLDS_FILE_ENV) {
            let v = v.trim();
            if v.is_empty() {
                tracing::warn!("{THRESHOLDS_FILE_ENV} is set but empty; using default thresholds");
            } else {
                cfg.thresholds_file = Some(PathBuf::from(v));
            }
        }

        if let Some(v) = lookup(METRICS_SEED_ENV) {
            match v.trim().parse::<u64>() {
                Ok(seed) => cfg.metrics_seed = Some(seed),
                Err(_) => tracing::warn!("Ignoring invalid {METRICS_SEED_ENV}: {v:?}"),
            }
        }

        cfg
    }

    /// Untrained service with defaults plus any threshold overrides.
    ///
    /// # Errors
    /// Returns error if the threshold file cannot be loaded.
    pub fn build_service(&self) -> Result<AnalysisService, SeptiscanError> {
        let mut service = AnalysisService::new();
        if let Some(path) = &self.thresholds_file {
            let overrides = load_thresholds(path)?;
            tracing::info!(
                "Applying {} threshold overrides from {}",
                overrides.len(),
                path.display()
            );
            service.update_thresholds(overrides);
        }
        Ok(service)
    }

    /// Metrics sampler honoring the configured seed.
    #[must_use]
    pub fn sampler(&self) -> ChaChaQualitySampler {
        ChaChaQualitySampler::from_optional_seed(self.metrics_seed)
    }
}
