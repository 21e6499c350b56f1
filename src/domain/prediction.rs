//! Risk prediction types.
//!
//! Represents the output of the rule-based sepsis scorer.

use serde::{Deserialize, Serialize};

/// Risk level classification for sepsis deterioration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Low risk of sepsis
    Low,
    /// Moderate risk, closer monitoring recommended
    Moderate,
    /// High risk, early intervention recommended
    High,
    /// Critical risk, emergency bundle indicated
    Critical,
    /// Not enough trustworthy data to classify
    Uncertain,
}

impl RiskLevel {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant sepsis indicators",
            Self::Moderate => "Moderate risk - Enhanced monitoring recommended",
            Self::High => "High risk - Early intervention advised",
            Self::Critical => "Critical risk - Activate sepsis protocol",
            Self::Uncertain => "Uncertain - Insufficient data for reliable assessment",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::Uncertain => write!(f, "UNCERTAIN"),
        }
    }
}

/// Result of scoring one patient record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Sepsis probability (0.0 to 1.0)
    pub probability: f64,

    /// Confidence in the probability (0.3 to 0.96)
    pub confidence: f64,

    /// Risk classification
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_name() {
        for level in [
            RiskLevel::Low,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::Critical,
            RiskLevel::Uncertain,
        ] {
            let json = serde_json::to_string(&level).expect("Should serialize");
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn test_description_names_level() {
        assert!(RiskLevel::Critical.description().starts_with("Critical"));
        assert!(RiskLevel::Uncertain.description().contains("Insufficient data"));
    }
}
