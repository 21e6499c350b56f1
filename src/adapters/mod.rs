//! Adapters layer: Concrete implementations of ports and I/O helpers.
//!
//! - `rng`: ChaCha20-backed quality sampler
//! - `sanitize`: patient-identifier filtering for logs
//! - `threshold_file`: JSON persistence of threshold tables

pub mod rng;
pub mod sanitize;
pub mod threshold_file;

pub use rng::ChaChaQualitySampler;
