//! Threshold table types.
//!
//! A [`ThresholdTable`] maps parameter names to normal/critical ranges and
//! keeps insertion order, which is also the order violations are reported in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normal range and critical limit for one monitored parameter.
///
/// No sanity check is applied (`min` may exceed `max`); the table is taken
/// as configured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterThreshold {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,

    /// Disabled parameters are skipped by violation checks entirely.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl ParameterThreshold {
    /// Enabled threshold with a normal range and a critical limit.
    #[must_use]
    pub const fn new(min: f64, max: f64, critical: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            critical: Some(critical),
            enabled: true,
        }
    }

    /// Same threshold with `enabled` set to false.
    #[must_use]
    pub const fn disabled(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }
}

/// Which side of the critical limit counts as a critical breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalDirection {
    /// Value below the limit is critical (hypotension, desaturation, ...)
    Below,
    /// Value above the limit is critical
    Above,
}

impl CriticalDirection {
    /// Fixed direction rule for a parameter name.
    #[must_use]
    pub fn for_parameter(parameter: &str) -> Self {
        match parameter {
            "SBP" | "MAP" | "O2Sat" | "Platelets" => Self::Below,
            _ => Self::Above,
        }
    }

    /// Whether `value` breaches `limit` in this direction.
    #[must_use]
    pub fn is_breached(self, value: f64, limit: f64) -> bool {
        match self {
            Self::Below => value < limit,
            Self::Above => value > limit,
        }
    }
}

/// Insertion-ordered mapping of parameter name to [`ParameterThreshold`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdTable {
    entries: Vec<(String, ParameterThreshold)>,
}

impl ThresholdTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clinical defaults for the ten monitored parameters.
    #[must_use]
    pub fn clinical_defaults() -> Self {
        DEFAULT_THRESHOLDS
            .iter()
            .map(|(name, threshold)| ((*name).to_string(), *threshold))
            .collect()
    }

    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<&ParameterThreshold> {
        self.entries
            .iter()
            .find(|(name, _)| name == parameter)
            .map(|(_, threshold)| threshold)
    }

    /// Insert or replace an entry. Replacement keeps the original position.
    pub fn insert(&mut self, parameter: impl Into<String>, threshold: ParameterThreshold) {
        let parameter = parameter.into();
        match self.entries.iter_mut().find(|(name, _)| *name == parameter) {
            Some((_, existing)) => *existing = threshold,
            None => self.entries.push((parameter, threshold)),
        }
    }

    /// Overwrite every entry named in `partial` wholesale; others are untouched.
    pub fn merge(&mut self, partial: ThresholdTable) {
        for (parameter, threshold) in partial.entries {
            self.insert(parameter, threshold);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterThreshold)> {
        self.entries.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ParameterThreshold)> for ThresholdTable {
    fn from_iter<I: IntoIterator<Item = (String, ParameterThreshold)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (parameter, threshold) in iter {
            table.insert(parameter, threshold);
        }
        table
    }
}

impl Serialize for ThresholdTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, threshold) in &self.entries {
            map.serialize_entry(name, threshold)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ThresholdTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ThresholdTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter name to threshold")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = ThresholdTable::new();
                while let Some((name, threshold)) =
                    access.next_entry::<String, ParameterThreshold>()?
                {
                    table.insert(name, threshold);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// Default clinical ranges: vitals first, then labs.
const DEFAULT_THRESHOLDS: [(&str, ParameterThreshold); 10] = [
    ("HR", ParameterThreshold::new(60.0, 100.0, 120.0)),
    ("Temp", ParameterThreshold::new(36.0, 38.0, 39.5)),
    ("SBP", ParameterThreshold::new(90.0, 140.0, 80.0)),
    ("MAP", ParameterThreshold::new(70.0, 100.0, 65.0)),
    ("Resp", ParameterThreshold::new(12.0, 20.0, 30.0)),
    ("O2Sat", ParameterThreshold::new(95.0, 100.0, 90.0)),
    ("WBC", ParameterThreshold::new(4.0, 12.0, 20.0)),
    ("Lactate", ParameterThreshold::new(0.5, 2.2, 4.0)),
    ("Creatinine", ParameterThreshold::new(0.6, 1.2, 3.0)),
    ("Platelets", ParameterThreshold::new(150.0, 400.0, 50.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_order_and_size() {
        let table = ThresholdTable::clinical_defaults();
        assert_eq!(table.len(), 10);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names[0], "HR");
        assert_eq!(names[9], "Platelets");

        let lactate = table.get("Lactate").expect("Lactate default");
        assert_eq!(lactate.min, Some(0.5));
        assert_eq!(lactate.max, Some(2.2));
        assert_eq!(lactate.critical, Some(4.0));
        assert!(lactate.enabled);
    }

    #[test]
    fn test_critical_direction() {
        assert_eq!(CriticalDirection::for_parameter("MAP"), CriticalDirection::Below);
        assert_eq!(CriticalDirection::for_parameter("O2Sat"), CriticalDirection::Below);
        assert_eq!(CriticalDirection::for_parameter("Lactate"), CriticalDirection::Above);
        assert_eq!(CriticalDirection::for_parameter("Anything"), CriticalDirection::Above);

        assert!(CriticalDirection::Below.is_breached(60.0, 65.0));
        assert!(!CriticalDirection::Below.is_breached(65.0, 65.0));
        assert!(CriticalDirection::Above.is_breached(4.5, 4.0));
    }

    #[test]
    fn test_merge_replaces_whole_entry_and_keeps_position() {
        let mut table = ThresholdTable::clinical_defaults();
        let mut partial = ThresholdTable::new();
        partial.insert(
            "HR",
            ParameterThreshold {
                min: None,
                max: Some(110.0),
                critical: None,
                enabled: true,
            },
        );
        partial.insert("PTT", ParameterThreshold::new(25.0, 35.0, 60.0));
        table.merge(partial);

        let hr = table.get("HR").expect("HR present");
        assert_eq!(hr.min, None);
        assert_eq!(hr.critical, None);
        assert_eq!(hr.max, Some(110.0));
        assert_eq!(table.names().next(), Some("HR"));
        assert_eq!(table.names().last(), Some("PTT"));
        assert_eq!(table.len(), 11);
    }

    #[test]
    fn test_json_keeps_insertion_order() {
        let json = r#"{"Temp": {"min": 35.5, "max": 38.5}, "HR": {"critical": 130, "enabled": false}}"#;
        let table: ThresholdTable = serde_json::from_str(json).expect("Should parse");

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["Temp", "HR"]);
        assert!(table.get("Temp").expect("Temp").enabled);
        assert!(!table.get("HR").expect("HR").enabled);

        let out = serde_json::to_string(&table).expect("Should serialize");
        assert!(out.find("Temp").expect("Temp") < out.find("HR").expect("HR"));
    }
}
