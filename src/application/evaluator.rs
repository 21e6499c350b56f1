//! Threshold evaluator: patient record against the threshold table.

use crate::domain::{CriticalDirection, PatientRecord, Severity, ThresholdTable, Violation};

/// Produces threshold violations in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdEvaluator;

impl ThresholdEvaluator {
    /// Compare `record` against every enabled entry of `table`.
    ///
    /// Per parameter the order is critical, then below-min, then above-max.
    /// Values are resolved from vitals first, then labs; parameters without
    /// a value are skipped.
    #[must_use]
    pub fn evaluate(&self, record: &PatientRecord, table: &ThresholdTable) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (parameter, threshold) in table.iter() {
            if !threshold.enabled {
                continue;
            }
            let Some(value) = record.resolve(parameter) else {
                continue;
            };

            let violation = |limit: f64, severity: Severity| Violation {
                parameter: parameter.to_string(),
                value,
                threshold: limit,
                severity,
            };

            if let Some(critical) = threshold.critical {
                if CriticalDirection::for_parameter(parameter).is_breached(value, critical) {
                    violations.push(violation(critical, Severity::Critical));
                }
            }
            if let Some(min) = threshold.min {
                if value < min {
                    violations.push(violation(min, Severity::Warning));
                }
            }
            if let Some(max) = threshold.max {
                if value > max {
                    violations.push(violation(max, Severity::Warning));
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Labs, ParameterThreshold, Vitals};

    fn record(vitals: Vitals, labs: Labs) -> PatientRecord {
        PatientRecord::new(vitals, labs)
    }

    #[test]
    fn test_no_values_no_violations() {
        let violations =
            ThresholdEvaluator.evaluate(&PatientRecord::default(), &ThresholdTable::clinical_defaults());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_critical_then_range_breach() {
        let r = record(
            Vitals {
                map: Some(60.0),
                ..Vitals::default()
            },
            Labs {
                lactate: Some(4.5),
                ..Labs::default()
            },
        );
        let violations = ThresholdEvaluator.evaluate(&r, &ThresholdTable::clinical_defaults());

        assert_eq!(violations.len(), 4);
        assert_eq!(violations[0].parameter, "MAP");
        assert_eq!(violations[0].severity, Severity::Critical);
        assert_eq!(violations[0].threshold, 65.0);
        assert_eq!(violations[1].parameter, "MAP");
        assert_eq!(violations[1].severity, Severity::Warning);
        assert_eq!(violations[1].threshold, 70.0);
        assert_eq!(violations[2].parameter, "Lactate");
        assert!(violations[2].is_critical());
        assert_eq!(violations[3].threshold, 2.2);
    }

    #[test]
    fn test_disabled_parameter_skipped() {
        let mut table = ThresholdTable::clinical_defaults();
        table.insert("HR", ParameterThreshold::new(60.0, 100.0, 120.0).disabled());
        let r = record(
            Vitals {
                hr: Some(180.0),
                ..Vitals::default()
            },
            Labs::default(),
        );
        assert!(ThresholdEvaluator.evaluate(&r, &table).is_empty());
    }

    #[test]
    fn test_contradictory_range_can_emit_three() {
        let mut table = ThresholdTable::new();
        table.insert("Creatinine", ParameterThreshold::new(5.0, 1.0, 3.0));
        let r = record(
            Vitals::default(),
            Labs {
                creatinine: Some(4.0),
                ..Labs::default()
            },
        );
        let severities: Vec<_> = ThresholdEvaluator
            .evaluate(&r, &table)
            .into_iter()
            .map(|v| (v.severity, v.threshold))
            .collect();
        assert_eq!(
            severities,
            vec![
                (Severity::Critical, 3.0),
                (Severity::Warning, 5.0),
                (Severity::Warning, 1.0),
            ]
        );
    }

    #[test]
    fn test_follows_table_order_not_record_order() {
        let mut table = ThresholdTable::new();
        table.insert("WBC", ParameterThreshold::new(4.0, 12.0, 20.0));
        table.insert("HR", ParameterThreshold::new(60.0, 100.0, 120.0));
        let r = record(
            Vitals {
                hr: Some(130.0),
                ..Vitals::default()
            },
            Labs {
                wbc: Some(2.0),
                ..Labs::default()
            },
        );
        let params: Vec<_> = ThresholdEvaluator
            .evaluate(&r, &table)
            .into_iter()
            .map(|v| v.parameter)
            .collect();
        assert_eq!(params, vec!["WBC", "HR", "HR"]);
    }

    #[test]
    fn test_extra_parameter_resolved_from_labs() {
        let mut table = ThresholdTable::new();
        table.insert(
            "BUN",
            ParameterThreshold {
                min: None,
                max: Some(20.0),
                critical: None,
                enabled: true,
            },
        );
        let mut labs = Labs::default();
        labs.extra.insert("BUN".to_string(), serde_json::Value::from(35.0));
        let violations = ThresholdEvaluator.evaluate(&record(Vitals::default(), labs), &table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].value, 35.0);
    }
}
