//! Recommendation engine: tiered recommendations, treatment plan and
//! follow-up actions keyed on risk level and critical violations.

use crate::domain::{RiskLevel, UncertaintyFactor, Violation};

const UNCERTAIN_RECOMMENDATIONS: [&str; 4] = [
    "Obtain missing laboratory values (lactate, CBC) before final risk determination",
    "Repeat full vital sign assessment within 1 hour",
    "Apply clinical judgment: model confidence is insufficient for automated triage",
    "Escalate to senior clinician if clinical suspicion of sepsis persists",
];

const CRITICAL_RECOMMENDATIONS: [&str; 5] = [
    "Activate sepsis alert and notify rapid response team immediately",
    "Obtain blood cultures before starting antibiotics",
    "Administer broad-spectrum antibiotics within 1 hour",
    "Begin 30 mL/kg crystalloid bolus for hypotension or lactate >= 4 mmol/L",
    "Consider ICU admission",
];

const HIGH_RECOMMENDATIONS: [&str; 4] = [
    "Increase vital sign monitoring to every 15-30 minutes",
    "Repeat lactate within 2-4 hours",
    "Obtain blood cultures and consider early antibiotic therapy",
    "Notify attending physician of elevated sepsis risk",
];

const CRITICAL_LACTATE_RECOMMENDATION: &str =
    "Severe hyperlactatemia: repeat lactate within 2 hours and assess tissue perfusion";
const CRITICAL_MAP_RECOMMENDATION: &str =
    "MAP below critical threshold: start vasopressors if unresponsive to fluid resuscitation";

const UNCERTAIN_TREATMENT: [&str; 3] = [
    "Defer empiric treatment decisions until missing data is available, unless clinically unstable",
    "Maintain IV access and supportive care",
    "Re-run risk assessment as soon as pending results arrive",
];

const CRITICAL_TREATMENT: [&str; 4] = [
    "Hour-1 sepsis bundle: cultures, lactate, antibiotics and fluids",
    "Vasopressors to target MAP >= 65 mmHg if hypotension persists after fluids",
    "Urgent evaluation for infection source control",
    "Continuous hemodynamic monitoring",
];

const HIGH_TREATMENT: [&str; 3] = [
    "Early empiric antibiotics per institutional protocol",
    "Fluid resuscitation guided by perfusion markers",
    "Serial lactate and vital sign monitoring",
];

const REASSESSMENT_ACTIONS: [&str; 2] = [
    "Reassess risk once missing laboratory results are available",
    "Repeat vital signs and re-run analysis within 1 hour",
];

const STANDING_ACTIONS: [&str; 3] = [
    "Repeat sepsis screening at the next vital sign cycle",
    "Review lactate and WBC trends over the last 24 hours",
    "Document sepsis screening outcome in the patient record",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Maps risk level and violations to action lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Risk-level recommendations followed by violation-specific ones, in
    /// violation order (so table order decides MAP vs Lactate).
    #[must_use]
    pub fn recommendations(&self, level: RiskLevel, violations: &[Violation]) -> Vec<String> {
        let mut recommendations = match level {
            RiskLevel::Uncertain => owned(&UNCERTAIN_RECOMMENDATIONS),
            RiskLevel::Critical => owned(&CRITICAL_RECOMMENDATIONS),
            RiskLevel::High => owned(&HIGH_RECOMMENDATIONS),
            RiskLevel::Low | RiskLevel::Moderate => Vec::new(),
        };

        for violation in violations.iter().filter(|v| v.is_critical()) {
            match violation.parameter.as_str() {
                "Lactate" => recommendations.push(CRITICAL_LACTATE_RECOMMENDATION.to_string()),
                "MAP" => recommendations.push(CRITICAL_MAP_RECOMMENDATION.to_string()),
                _ => {}
            }
        }

        recommendations
    }

    /// Treatment plan; empty for low and moderate risk.
    #[must_use]
    pub fn treatment_plan(&self, level: RiskLevel) -> Vec<String> {
        match level {
            RiskLevel::Uncertain => owned(&UNCERTAIN_TREATMENT),
            RiskLevel::Critical => owned(&CRITICAL_TREATMENT),
            RiskLevel::High => owned(&HIGH_TREATMENT),
            RiskLevel::Low | RiskLevel::Moderate => Vec::new(),
        }
    }

    /// Reassessment items when anything is uncertain, then standing orders.
    #[must_use]
    pub fn follow_up_actions(&self, uncertainty: &[UncertaintyFactor]) -> Vec<String> {
        let mut actions = Vec::with_capacity(REASSESSMENT_ACTIONS.len() + STANDING_ACTIONS.len());
        if !uncertainty.is_empty() {
            actions.extend(owned(&REASSESSMENT_ACTIONS));
        }
        actions.extend(owned(&STANDING_ACTIONS));
        actions
    }
}
