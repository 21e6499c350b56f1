//! Risk scorer: weighted multi-channel sepsis evidence accumulation.
//!
//! Each evidence channel contributes tiered weights to a running risk score.
//! Confidence starts from a fixed base, gains a bonus from lactate, loses a
//! penalty for every missing key measurement and is finally attenuated by how
//! complete the SIRS channels (temperature, heart rate, respiratory rate,
//! white cell count) are.
//!
//! Weights are clinical coefficients and are reproduced exactly; absence of a
//! value is evidence of uncertainty, never an error.

use serde::Serialize;

use crate::domain::{PatientRecord, Prediction, RiskLevel};

/// Confidence before any bonus or penalty.
pub const BASE_CONFIDENCE: f64 = 0.88;
/// Lower clamp for the final confidence.
pub const MIN_CONFIDENCE: f64 = 0.3;
/// Upper clamp for the final confidence.
pub const MAX_CONFIDENCE: f64 = 0.96;

const PROBABILITY_SCALE: f64 = 1.05;
const PENALTY_FACTOR: f64 = 0.7;

const PENALTY_MISSING_TEMP: f64 = 0.06;
const PENALTY_MISSING_HR: f64 = 0.06;
const PENALTY_MISSING_RESP: f64 = 0.05;
const PENALTY_MISSING_WBC: f64 = 0.10;
const PENALTY_MISSING_LACTATE: f64 = 0.12;

const UNCERTAIN_CONFIDENCE: f64 = 0.55;
const UNCERTAIN_COMPLETENESS: f64 = 0.35;
const LOW_BELOW: f64 = 0.18;
const MODERATE_BELOW: f64 = 0.42;
const HIGH_BELOW: f64 = 0.68;

// Exclusive tiers as (bound, weight), most extreme first. `_ABOVE` tiers fire
// when value > bound, `_BELOW` tiers when value < bound.
const MAP_BELOW: [(f64, f64); 3] = [(65.0, 0.35), (70.0, 0.22), (75.0, 0.12)];
const CREATININE_ABOVE: [(f64, f64); 3] = [(3.0, 0.25), (2.0, 0.18), (1.5, 0.10)];
const PLATELETS_BELOW: [(f64, f64); 3] = [(50.0, 0.28), (100.0, 0.20), (150.0, 0.12)];
const O2SAT_BELOW: [(f64, f64); 3] = [(85.0, 0.30), (90.0, 0.22), (95.0, 0.12)];
const PH_BELOW: [(f64, f64); 3] = [(7.20, 0.25), (7.30, 0.15), (7.35, 0.08)];
const BILIRUBIN_ABOVE: [(f64, f64); 2] = [(4.0, 0.20), (2.0, 0.12)];
const PTT_ABOVE: [(f64, f64); 2] = [(60.0, 0.15), (45.0, 0.08)];
const ICULOS_ABOVE: [(f64, f64); 3] = [(72.0, 0.12), (48.0, 0.08), (24.0, 0.05)];
const AGE_ABOVE: [(f64, f64); 2] = [(75.0, 0.08), (65.0, 0.05)];
const HOSP_ADM_ABOVE: [(f64, f64); 2] = [(168.0, 0.08), (72.0, 0.05)];

/// Lactate tiers as (bound, weight, confidence bonus).
const LACTATE_ABOVE: [(f64, f64, f64); 4] = [
    (4.0, 0.42, 0.10),
    (2.5, 0.28, 0.06),
    (2.0, 0.18, 0.03),
    (1.5, 0.08, 0.0),
];

fn tier_above(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(bound, _)| value > *bound)
        .map_or(0.0, |(_, weight)| *weight)
}

fn tier_below(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(bound, _)| value < *bound)
        .map_or(0.0, |(_, weight)| *weight)
}

/// Weight contributed by one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub channel: &'static str,
    pub weight: f64,
}

/// Full explanation of a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub prediction: Prediction,
    /// Non-zero channel contributions in evaluation order
    pub contributions: Vec<Contribution>,
    /// Number of SIRS criteria met
    pub sirs_count: u32,
    /// SIRS channels present
    pub data_completeness: u32,
    /// SIRS channels checked (those whose section is present)
    pub total_checks: u32,
    pub completeness_ratio: f64,
    /// Sum of missing-data penalties, before the 0.7 factor
    pub uncertainty_penalty: f64,
    pub lactate_bonus: f64,
    /// Unclamped accumulated risk
    pub raw_score: f64,
}

#[derive(Default)]
struct Evidence {
    risk: f64,
    contributions: Vec<Contribution>,
    sirs_count: u32,
    data_completeness: u32,
    total_checks: u32,
    penalty: f64,
    lactate_bonus: f64,
}

impl Evidence {
    fn add(&mut self, channel: &'static str, weight: f64) {
        if weight > 0.0 {
            self.risk += weight;
            self.contributions.push(Contribution { channel, weight });
        }
    }

    /// Track a SIRS channel: completeness, missing penalty and criterion count.
    fn sirs_channel(
        &mut self,
        section_present: bool,
        value: Option<f64>,
        missing_penalty: f64,
        criterion: impl Fn(f64) -> bool,
    ) -> Option<f64> {
        if section_present {
            self.total_checks += 1;
        }
        match value {
            Some(v) => {
                if section_present {
                    self.data_completeness += 1;
                }
                if criterion(v) {
                    self.sirs_count += 1;
                }
                Some(v)
            }
            None => {
                self.penalty += missing_penalty;
                None
            }
        }
    }
}

/// Deterministic rule-based sepsis risk scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Score a record.
    #[must_use]
    pub fn score(&self, record: &PatientRecord) -> Prediction {
        self.explain(record).prediction
    }

    /// Score a record and keep every intermediate quantity.
    #[must_use]
    pub fn explain(&self, record: &PatientRecord) -> ScoreBreakdown {
        let mut ev = Evidence::default();
        let has_vitals = record.vitals.is_some();
        let has_labs = record.labs.is_some();

        if let Some(t) = ev.sirs_channel(has_vitals, record.temp(), PENALTY_MISSING_TEMP, |t| {
            t > 38.0 || t < 36.0
        }) {
            ev.add("temperature", temperature_weight(t));
        }

        if let Some(hr) = ev.sirs_channel(has_vitals, record.hr(), PENALTY_MISSING_HR, |hr| {
            hr > 90.0
        }) {
            ev.add("heart_rate", heart_rate_weight(hr));
        }

        if let Some(resp) = ev.sirs_channel(has_vitals, record.resp(), PENALTY_MISSING_RESP, |r| {
            r > 20.0
        }) {
            ev.add("respiratory_rate", respiratory_weight(resp));
        }

        if let Some(wbc) = ev.sirs_channel(has_labs, record.wbc(), PENALTY_MISSING_WBC, |w| {
            w > 12.0 || w < 4.0
        }) {
            ev.add("white_cell_count", wbc_weight(wbc));
        }

        if let Some(map) = record.map() {
            ev.add("mean_arterial_pressure", tier_below(map, &MAP_BELOW));
        }

        match record.lactate() {
            Some(lactate) => {
                if let Some((_, weight, bonus)) =
                    LACTATE_ABOVE.iter().find(|(bound, _, _)| lactate > *bound)
                {
                    ev.add("lactate", *weight);
                    ev.lactate_bonus += bonus;
                }
            }
            None => ev.penalty += PENALTY_MISSING_LACTATE,
        }

        if let Some(v) = record.creatinine() {
            ev.add("creatinine", tier_above(v, &CREATININE_ABOVE));
        }
        if let Some(v) = record.platelets() {
            ev.add("platelets", tier_below(v, &PLATELETS_BELOW));
        }
        if let Some(v) = record.o2_sat() {
            ev.add("oxygen_saturation", tier_below(v, &O2SAT_BELOW));
        }
        if let Some(v) = record.ph() {
            ev.add("ph", tier_below(v, &PH_BELOW));
        }
        if let Some(v) = record.bilirubin_total() {
            ev.add("bilirubin", tier_above(v, &BILIRUBIN_ABOVE));
        }
        if let Some(v) = record.ptt() {
            ev.add("coagulation", tier_above(v, &PTT_ABOVE));
        }
        if let Some(v) = record.iculos {
            ev.add("icu_length_of_stay", tier_above(v, &ICULOS_ABOVE));
        }
        if let Some(v) = record.age {
            ev.add("age", tier_above(v, &AGE_ABOVE));
        }
        if let Some(v) = record.hosp_adm_time {
            ev.add("hospital_admission_time", tier_above(v, &HOSP_ADM_ABOVE));
        }

        let completeness_ratio = if ev.total_checks == 0 {
            0.0
        } else {
            f64::from(ev.data_completeness) / f64::from(ev.total_checks)
        };

        let adjusted = BASE_CONFIDENCE + ev.lactate_bonus - PENALTY_FACTOR * ev.penalty;
        let confidence =
            (adjusted * (0.75 + 0.25 * completeness_ratio)).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        let probability = (ev.risk * PROBABILITY_SCALE).clamp(0.0, 1.0);
        let risk_level = classify(probability, confidence, completeness_ratio);

        tracing::debug!(
            "Scored record: raw={:.3} probability={:.3} confidence={:.3} completeness={:.2} sirs={} level={}",
            ev.risk,
            probability,
            confidence,
            completeness_ratio,
            ev.sirs_count,
            risk_level
        );

        ScoreBreakdown {
            prediction: Prediction {
                probability,
                confidence,
                risk_level,
            },
            contributions: ev.contributions,
            sirs_count: ev.sirs_count,
            data_completeness: ev.data_completeness,
            total_checks: ev.total_checks,
            completeness_ratio,
            uncertainty_penalty: ev.penalty,
            lactate_bonus: ev.lactate_bonus,
            raw_score: ev.risk,
        }
    }
}

/// Risk level from the final numbers. The two uncertainty gates come first.
#[must_use]
pub fn classify(probability: f64, confidence: f64, completeness_ratio: f64) -> RiskLevel {
    if confidence < UNCERTAIN_CONFIDENCE || completeness_ratio < UNCERTAIN_COMPLETENESS {
        RiskLevel::Uncertain
    } else if probability < LOW_BELOW {
        RiskLevel::Low
    } else if probability < MODERATE_BELOW {
        RiskLevel::Moderate
    } else if probability < HIGH_BELOW {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

fn temperature_weight(t: f64) -> f64 {
    let mut weight = 0.0;
    if t > 38.0 || t < 36.0 {
        weight += 0.24;
    }
    if t > 39.5 || t < 35.0 {
        weight += 0.18;
    }
    if t > 40.0 || t < 34.0 {
        weight += 0.12;
    }
    weight
}

fn heart_rate_weight(hr: f64) -> f64 {
    let mut weight = 0.0;
    if hr > 90.0 {
        weight += 0.21;
    }
    if hr > 120.0 {
        weight += 0.15;
    }
    if hr > 150.0 {
        weight += 0.10;
    }
    // Bradycardia is scored on its own, outside the tachycardia ladder.
    if hr < 60.0 {
        weight += 0.18;
    }
    weight
}

fn respiratory_weight(resp: f64) -> f64 {
    let mut weight = 0.0;
    if resp > 20.0 {
        weight += 0.19;
    }
    if resp > 30.0 {
        weight += 0.13;
    }
    if resp > 40.0 {
        weight += 0.08;
    }
    weight
}

fn wbc_weight(wbc: f64) -> f64 {
    let mut weight = 0.0;
    if wbc > 12.0 || wbc < 4.0 {
        weight += 0.28;
    }
    if wbc > 20.0 || wbc < 2.0 {
        weight += 0.20;
    }
    if wbc > 30.0 || wbc < 1.0 {
        weight += 0.15;
    }
    weight
}
