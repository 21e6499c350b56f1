//! Findings generator: human-readable clinical findings.
//!
//! The literal cut-offs here are bedside screening rules and are independent
//! of the configurable threshold table; the two may disagree.

use crate::domain::{PatientRecord, Violation};

/// Turns raw values and critical violations into findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindingsGenerator;

impl FindingsGenerator {
    #[must_use]
    pub fn generate(&self, record: &PatientRecord, violations: &[Violation]) -> Vec<String> {
        let mut findings = Vec::new();

        if let Some(hr) = record.hr().filter(|&hr| hr > 100.0) {
            findings.push(format!("Tachycardia: heart rate {hr} bpm"));
        }
        if let Some(temp) = record.temp() {
            if temp > 38.3 {
                findings.push(format!("Fever: temperature {temp}°C"));
            } else if temp < 36.0 {
                findings.push(format!("Hypothermia: temperature {temp}°C"));
            }
        }
        if let Some(sbp) = record.sbp().filter(|&sbp| sbp < 90.0) {
            findings.push(format!("Hypotension: systolic blood pressure {sbp} mmHg"));
        }
        if let Some(resp) = record.resp().filter(|&resp| resp > 22.0) {
            findings.push(format!("Tachypnea: respiratory rate {resp}/min"));
        }
        if let Some(lactate) = record.lactate().filter(|&l| l > 2.5) {
            findings.push(format!("Elevated lactate: {lactate} mmol/L"));
        }
        if let Some(wbc) = record.wbc() {
            if wbc > 12.0 {
                findings.push(format!("Leukocytosis: WBC {wbc} x10^9/L"));
            } else if wbc < 4.0 {
                findings.push(format!("Leukopenia: WBC {wbc} x10^9/L"));
            }
        }
        if let Some(platelets) = record.platelets().filter(|&p| p < 150.0) {
            findings.push(format!("Thrombocytopenia: platelets {platelets} x10^9/L"));
        }

        findings.extend(violations.iter().filter(|v| v.is_critical()).map(|v| {
            format!(
                "CRITICAL: {} at {} (threshold: {})",
                v.parameter, v.value, v.threshold
            )
        }));

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Labs, Severity, Vitals};

    #[test]
    fn test_no_findings_for_normal_values() {
        let record = PatientRecord::new(
            Vitals {
                hr: Some(80.0),
                temp: Some(37.0),
                sbp: Some(120.0),
                resp: Some(16.0),
                ..Vitals::default()
            },
            Labs {
                lactate: Some(1.2),
                wbc: Some(8.0),
                platelets: Some(250.0),
                ..Labs::default()
            },
        );
        assert!(FindingsGenerator.generate(&record, &[]).is_empty());
    }

    #[test]
    fn test_findings_order_and_format() {
        let record = PatientRecord::new(
            Vitals {
                hr: Some(130.0),
                temp: Some(35.5),
                sbp: Some(82.0),
                resp: Some(28.0),
                ..Vitals::default()
            },
            Labs {
                lactate: Some(4.5),
                wbc: Some(2.5),
                platelets: Some(80.0),
                ..Labs::default()
            },
        );
        let violations = vec![
            Violation {
                parameter: "HR".to_string(),
                value: 130.0,
                threshold: 100.0,
                severity: Severity::Warning,
            },
            Violation {
                parameter: "Lactate".to_string(),
                value: 4.5,
                threshold: 4.0,
                severity: Severity::Critical,
            },
        ];
        let findings = FindingsGenerator.generate(&record, &violations);

        assert_eq!(findings.len(), 8);
        assert_eq!(findings[0], "Tachycardia: heart rate 130 bpm");
        assert_eq!(findings[1], "Hypothermia: temperature 35.5°C");
        assert!(findings[2].starts_with("Hypotension"));
        assert!(findings[3].starts_with("Tachypnea"));
        assert_eq!(findings[4], "Elevated lactate: 4.5 mmol/L");
        assert!(findings[5].starts_with("Leukopenia"));
        assert!(findings[6].starts_with("Thrombocytopenia"));
        assert_eq!(findings[7], "CRITICAL: Lactate at 4.5 (threshold: 4)");
    }

    #[test]
    fn test_literal_cutoffs_ignore_registry() {
        // HR 101 is a finding even though the default critical limit is 120.
        let record = PatientRecord::new(
            Vitals {
                hr: Some(101.0),
                temp: Some(38.3),
                ..Vitals::default()
            },
            Labs::default(),
        );
        let findings = FindingsGenerator.generate(&record, &[]);
        assert_eq!(findings, vec!["Tachycardia: heart rate 101 bpm".to_string()]);
    }
}
