//! Property-based tests for scorer, evaluator and metrics invariants.

use proptest::prelude::*;

use septiscan::application::{
    MetricsSynthesizer, RiskScorer, ThresholdEvaluator, MAX_CONFIDENCE, MIN_CONFIDENCE,
};
use septiscan::domain::{
    DatasetSummary, Labs, ParameterThreshold, PatientRecord, QualitySample, RiskLevel, Severity,
    ThresholdTable, Vitals,
};
use septiscan::ports::{ACCURACY_RANGE, AUC_RANGE, PRECISION_RANGE, RECALL_RANGE};

fn value() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-1.0e4..1.0e4f64)
}

prop_compose! {
    fn any_vitals()(
        hr in value(), temp in value(), resp in value(),
        map in value(), sbp in value(), o2_sat in value(),
    ) -> Vitals {
        Vitals { hr, temp, resp, map, sbp, o2_sat, ..Vitals::default() }
    }
}

prop_compose! {
    fn any_labs()(
        wbc in value(), lactate in value(), creatinine in value(),
        platelets in value(), ph in value(), bilirubin_total in value(), ptt in value(),
    ) -> Labs {
        Labs { wbc, lactate, creatinine, platelets, ph, bilirubin_total, ptt, ..Labs::default() }
    }
}

prop_compose! {
    fn any_record()(
        vitals in prop::option::of(any_vitals()),
        labs in prop::option::of(any_labs()),
        age in value(), iculos in value(), hosp_adm_time in value(),
    ) -> PatientRecord {
        PatientRecord { vitals, labs, age, iculos, hosp_adm_time }
    }
}

fn with_lactate(base: &PatientRecord, lactate: f64) -> PatientRecord {
    let mut record = base.clone();
    record.labs.get_or_insert_with(Labs::default).lactate = Some(lactate);
    record
}

proptest! {
    #[test]
    fn prop_prediction_stays_clamped(record in any_record()) {
        let prediction = RiskScorer.score(&record);
        prop_assert!((0.0..=1.0).contains(&prediction.probability));
        prop_assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&prediction.confidence));
    }

    #[test]
    fn prop_lactate_ladder_never_lowers_probability(record in any_record()) {
        let mut last = -1.0;
        for lactate in [1.4, 1.6, 2.1, 2.6, 4.1] {
            let p = RiskScorer.score(&with_lactate(&record, lactate)).probability;
            prop_assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn prop_sectionless_record_is_uncertain(
        age in value(), iculos in value(), hosp in value()
    ) {
        let record = PatientRecord { age, iculos, hosp_adm_time: hosp, ..PatientRecord::default() };
        prop_assert_eq!(RiskScorer.score(&record).risk_level, RiskLevel::Uncertain);
    }

    #[test]
    fn prop_at_most_three_violations_in_order(
        v in -1.0e3..1.0e3f64,
        min in -1.0e3..1.0e3f64,
        max in -1.0e3..1.0e3f64,
        critical in -1.0e3..1.0e3f64,
    ) {
        let mut table = ThresholdTable::new();
        table.insert("Lactate", ParameterThreshold { min: Some(min), max: Some(max), critical: Some(critical), enabled: true });
        let record = PatientRecord::new(Vitals::default(), Labs { lactate: Some(v), ..Labs::default() });

        let violations = ThresholdEvaluator.evaluate(&record, &table);
        prop_assert!(violations.len() <= 3);
        if let Some(pos) = violations.iter().position(|x| x.severity == Severity::Critical) {
            prop_assert_eq!(pos, 0);
        }
        let thresholds: Vec<f64> = violations
            .iter()
            .filter(|x| x.severity == Severity::Warning)
            .map(|x| x.threshold)
            .collect();
        if thresholds.len() == 2 {
            prop_assert_eq!(thresholds, vec![min, max]);
        }
    }

    #[test]
    fn prop_confusion_matrix_rows_exact(
        total in 0u64..1_000_000,
        positive_share in 0.0..=1.0f64,
        accuracy in ACCURACY_RANGE,
        recall in RECALL_RANGE,
        precision in PRECISION_RANGE,
        auc in AUC_RANGE,
    ) {
        let positives = ((total as f64) * positive_share).floor() as u64;
        let summary = DatasetSummary::new(total, positives.min(total)).expect("valid counts");
        let metrics = MetricsSynthesizer.derive(
            &summary,
            &QualitySample { accuracy, recall, precision, auc },
        );

        prop_assert_eq!(metrics.true_positives() + metrics.false_negatives(), summary.positives());
        prop_assert_eq!(metrics.false_positives() + metrics.true_negatives(), summary.negatives());
    }

    #[test]
    fn prop_thresholds_stable_without_update(record in any_record()) {
        let table = ThresholdTable::clinical_defaults();
        prop_assert_eq!(
            ThresholdEvaluator.evaluate(&record, &table),
            ThresholdEvaluator.evaluate(&record, &table)
        );
    }
}
