//! Patient record types for sepsis risk assessment.
//!
//! Field names follow the PhysioNet sepsis challenge vocabulary (HR, Temp,
//! Lactate, ...). Every measurement is optional: a missing value is a
//! first-class state and never stands in for zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Vital signs section of a patient record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    /// Heart rate in beats per minute
    #[serde(rename = "HR", skip_serializing_if = "Option::is_none")]
    pub hr: Option<f64>,

    /// Pulse oximetry in %
    #[serde(rename = "O2Sat", skip_serializing_if = "Option::is_none")]
    pub o2_sat: Option<f64>,

    /// Temperature in °C
    #[serde(rename = "Temp", skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,

    /// Systolic blood pressure in mmHg
    #[serde(rename = "SBP", skip_serializing_if = "Option::is_none")]
    pub sbp: Option<f64>,

    /// Mean arterial pressure in mmHg
    #[serde(rename = "MAP", skip_serializing_if = "Option::is_none")]
    pub map: Option<f64>,

    /// Diastolic blood pressure in mmHg
    #[serde(rename = "DBP", skip_serializing_if = "Option::is_none")]
    pub dbp: Option<f64>,

    /// Respiratory rate in breaths per minute
    #[serde(rename = "Resp", skip_serializing_if = "Option::is_none")]
    pub resp: Option<f64>,

    /// Any other vital column; only numeric values resolve.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Vitals {
    /// Look up a vital by its vocabulary name.
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<f64> {
        match parameter {
            "HR" => self.hr,
            "O2Sat" => self.o2_sat,
            "Temp" => self.temp,
            "SBP" => self.sbp,
            "MAP" => self.map,
            "DBP" => self.dbp,
            "Resp" => self.resp,
            other => self.extra.get(other).and_then(Value::as_f64),
        }
    }
}

/// Laboratory results section of a patient record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labs {
    /// White blood cell count in 10^9/L
    #[serde(rename = "WBC", skip_serializing_if = "Option::is_none")]
    pub wbc: Option<f64>,

    /// Serum lactate in mmol/L
    #[serde(rename = "Lactate", skip_serializing_if = "Option::is_none")]
    pub lactate: Option<f64>,

    /// Creatinine in mg/dL
    #[serde(rename = "Creatinine", skip_serializing_if = "Option::is_none")]
    pub creatinine: Option<f64>,

    /// Platelet count in 10^9/L
    #[serde(rename = "Platelets", skip_serializing_if = "Option::is_none")]
    pub platelets: Option<f64>,

    /// Arterial pH
    #[serde(rename = "pH", skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,

    /// Total bilirubin in mg/dL
    #[serde(rename = "Bilirubin_total", skip_serializing_if = "Option::is_none")]
    pub bilirubin_total: Option<f64>,

    /// Partial thromboplastin time in seconds
    #[serde(rename = "PTT", skip_serializing_if = "Option::is_none")]
    pub ptt: Option<f64>,

    /// Any other lab column; only numeric values resolve.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Labs {
    /// Look up a lab by its vocabulary name.
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<f64> {
        match parameter {
            "WBC" => self.wbc,
            "Lactate" => self.lactate,
            "Creatinine" => self.creatinine,
            "Platelets" => self.platelets,
            "pH" => self.ph,
            "Bilirubin_total" => self.bilirubin_total,
            "PTT" => self.ptt,
            other => self.extra.get(other).and_then(Value::as_f64),
        }
    }
}

/// Read-only view of one patient at one point in time.
///
/// `vitals` and `labs` are themselves optional: an absent section is
/// different from a present section with no values, and only present
/// sections count toward data completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vitals>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labs: Option<Labs>,

    /// Age in years
    #[serde(rename = "Age", skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,

    /// Hours since ICU admission
    #[serde(rename = "ICULOS", skip_serializing_if = "Option::is_none")]
    pub iculos: Option<f64>,

    /// Hours between hospital admission and ICU admission
    #[serde(rename = "HospAdmTime", skip_serializing_if = "Option::is_none")]
    pub hosp_adm_time: Option<f64>,
}

impl PatientRecord {
    /// Create a record with both sections present.
    #[must_use]
    pub fn new(vitals: Vitals, labs: Labs) -> Self {
        Self {
            vitals: Some(vitals),
            labs: Some(labs),
            ..Self::default()
        }
    }

    /// Resolve a monitored parameter, checking vitals before labs.
    #[must_use]
    pub fn resolve(&self, parameter: &str) -> Option<f64> {
        self.vital(parameter).or_else(|| self.lab(parameter))
    }

    /// Value of a vital sign, if the section and value are present.
    #[must_use]
    pub fn vital(&self, parameter: &str) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.get(parameter))
    }

    /// Value of a lab result, if the section and value are present.
    #[must_use]
    pub fn lab(&self, parameter: &str) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.get(parameter))
    }

    #[must_use]
    pub fn hr(&self) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.hr)
    }

    #[must_use]
    pub fn temp(&self) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.temp)
    }

    #[must_use]
    pub fn resp(&self) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.resp)
    }

    #[must_use]
    pub fn sbp(&self) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.sbp)
    }

    #[must_use]
    pub fn map(&self) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.map)
    }

    #[must_use]
    pub fn o2_sat(&self) -> Option<f64> {
        self.vitals.as_ref().and_then(|v| v.o2_sat)
    }

    #[must_use]
    pub fn wbc(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.wbc)
    }

    #[must_use]
    pub fn lactate(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.lactate)
    }

    #[must_use]
    pub fn creatinine(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.creatinine)
    }

    #[must_use]
    pub fn platelets(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.platelets)
    }

    #[must_use]
    pub fn ph(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.ph)
    }

    #[must_use]
    pub fn bilirubin_total(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.bilirubin_total)
    }

    #[must_use]
    pub fn ptt(&self) -> Option<f64> {
        self.labs.as_ref().and_then(|l| l.ptt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_vitals() {
        let mut vitals = Vitals::default();
        vitals.extra.insert("Lactate".to_string(), Value::from(9.0));
        let labs = Labs {
            lactate: Some(3.0),
            ..Labs::default()
        };
        let record = PatientRecord::new(vitals, labs);

        assert_eq!(record.resolve("Lactate"), Some(9.0));
        assert_eq!(record.lactate(), Some(3.0));
    }

    #[test]
    fn test_missing_is_none_not_zero() {
        let record = PatientRecord::default();
        assert!(record.hr().is_none());
        assert!(record.resolve("HR").is_none());
        assert!(record.resolve("Unknown").is_none());
    }

    #[test]
    fn test_deserialize_vocabulary_names() {
        let json = r#"{
            "vitals": {"HR": 112, "Temp": 38.6, "EtCO2": 31},
            "labs": {"Lactate": 2.7, "Bilirubin_total": 1.1},
            "Age": 71,
            "ICULOS": 30
        }"#;
        let record: PatientRecord = serde_json::from_str(json).expect("Should parse");

        assert_eq!(record.hr(), Some(112.0));
        assert_eq!(record.temp(), Some(38.6));
        assert_eq!(record.resolve("EtCO2"), Some(31.0));
        assert_eq!(record.bilirubin_total(), Some(1.1));
        assert_eq!(record.age, Some(71.0));
        assert_eq!(record.iculos, Some(30.0));
        assert!(record.hosp_adm_time.is_none());
        assert!(record.resp().is_none());
    }

    #[test]
    fn test_non_numeric_extra_columns_tolerated() {
        let json = r#"{
            "vitals": {"HR": null, "Temp": 37.4, "EtCO2": null, "Unit": "MICU"},
            "labs": {"Lactate": 1.8, "FiO2": "NaN", "BUN": 18}
        }"#;
        let record: PatientRecord = serde_json::from_str(json).expect("Should parse");

        assert!(record.hr().is_none());
        assert_eq!(record.temp(), Some(37.4));
        assert!(record.resolve("EtCO2").is_none());
        assert!(record.resolve("Unit").is_none());
        assert!(record.resolve("FiO2").is_none());
        assert_eq!(record.resolve("BUN"), Some(18.0));
    }

    #[test]
    fn test_absent_sections_stay_absent() {
        let record: PatientRecord = serde_json::from_str("{}").expect("Should parse");
        assert!(record.vitals.is_none());
        assert!(record.labs.is_none());

        let record: PatientRecord =
            serde_json::from_str(r#"{"vitals": {}}"#).expect("Should parse");
        assert!(record.vitals.is_some());
        assert!(record.labs.is_none());
    }
}
