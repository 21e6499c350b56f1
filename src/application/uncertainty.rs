//! Uncertainty analyzer: missing and borderline inputs.

use crate::domain::{PatientRecord, UncertaintyFactor};

const BORDERLINE_LACTATE: (f64, f64) = (2.0, 2.5);
const BORDERLINE_HR: (f64, f64) = (85.0, 95.0);

fn strictly_between(value: f64, (low, high): (f64, f64)) -> bool {
    value > low && value < high
}

/// Flags inputs that should qualify a clinician's trust in the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct UncertaintyAnalyzer;

impl UncertaintyAnalyzer {
    /// Missing lactate, WBC, HR and temperature (in that order), then
    /// borderline lactate and heart rate.
    #[must_use]
    pub fn analyze(&self, record: &PatientRecord) -> Vec<UncertaintyFactor> {
        let mut factors = Vec::new();

        let missing = [
            (record.lactate(), UncertaintyFactor::MissingLactate),
            (record.wbc(), UncertaintyFactor::MissingWbc),
            (record.hr(), UncertaintyFactor::MissingHeartRate),
            (record.temp(), UncertaintyFactor::MissingTemperature),
        ];
        factors.extend(
            missing
                .into_iter()
                .filter(|(value, _)| value.is_none())
                .map(|(_, factor)| factor),
        );

        if record
            .lactate()
            .is_some_and(|l| strictly_between(l, BORDERLINE_LACTATE))
        {
            factors.push(UncertaintyFactor::BorderlineLactate);
        }
        if record
            .hr()
            .is_some_and(|hr| strictly_between(hr, BORDERLINE_HR))
        {
            factors.push(UncertaintyFactor::BorderlineHeartRate);
        }

        factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Labs, Vitals};

    #[test]
    fn test_empty_record_flags_all_missing() {
        let factors = UncertaintyAnalyzer.analyze(&PatientRecord::default());
        assert_eq!(
            factors,
            vec![
                UncertaintyFactor::MissingLactate,
                UncertaintyFactor::MissingWbc,
                UncertaintyFactor::MissingHeartRate,
                UncertaintyFactor::MissingTemperature,
            ]
        );
    }

    #[test]
    fn test_borderline_bounds_are_exclusive() {
        let record = |hr: f64, lactate: f64| {
            PatientRecord::new(
                Vitals {
                    hr: Some(hr),
                    temp: Some(37.0),
                    ..Vitals::default()
                },
                Labs {
                    wbc: Some(8.0),
                    lactate: Some(lactate),
                    ..Labs::default()
                },
            )
        };

        assert_eq!(
            UncertaintyAnalyzer.analyze(&record(90.0, 2.2)),
            vec![
                UncertaintyFactor::BorderlineLactate,
                UncertaintyFactor::BorderlineHeartRate
            ]
        );
        assert!(UncertaintyAnalyzer.analyze(&record(85.0, 2.0)).is_empty());
        assert!(UncertaintyAnalyzer.analyze(&record(95.0, 2.5)).is_empty());
    }

    #[test]
    fn test_missing_before_borderline() {
        let record = PatientRecord::new(
            Vitals {
                hr: Some(88.0),
                ..Vitals::default()
            },
            Labs::default(),
        );
        assert_eq!(
            UncertaintyAnalyzer.analyze(&record),
            vec![
                UncertaintyFactor::MissingLactate,
                UncertaintyFactor::MissingWbc,
                UncertaintyFactor::MissingTemperature,
                UncertaintyFactor::BorderlineHeartRate,
            ]
        );
    }
}
