//! Threshold registry: owner of the live threshold table.

use crate::domain::ThresholdTable;

/// Holds the threshold table for the lifetime of an engine.
///
/// Mutation goes through [`ThresholdRegistry::update`] only. The registry is
/// not synchronized; callers sharing one across threads serialize updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRegistry {
    table: ThresholdTable,
}

impl ThresholdRegistry {
    /// Registry seeded with the clinical defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(ThresholdTable::clinical_defaults())
    }

    #[must_use]
    pub fn with_table(table: ThresholdTable) -> Self {
        Self { table }
    }

    /// Current table.
    #[must_use]
    pub fn get(&self) -> &ThresholdTable {
        &self.table
    }

    /// Overwrite each entry named in `partial`; other entries are untouched.
    pub fn update(&mut self, partial: ThresholdTable) {
        if partial.is_empty() {
            return;
        }
        tracing::info!(
            "Updating {} threshold entries: {}",
            partial.len(),
            partial.names().collect::<Vec<_>>().join(", ")
        );
        self.table.merge(partial);
    }
}

impl Default for ThresholdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParameterThreshold;

    #[test]
    fn test_get_is_stable() {
        let registry = ThresholdRegistry::new();
        assert_eq!(registry.get(), registry.get());
        assert_eq!(registry.get(), &ThresholdTable::clinical_defaults());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut registry = ThresholdRegistry::new();
        let before = registry.get().clone();
        registry.update(ThresholdTable::new());
        assert_eq!(registry.get(), &before);
    }

    #[test]
    fn test_update_accepts_contradictory_range() {
        let mut registry = ThresholdRegistry::new();
        let mut partial = ThresholdTable::new();
        partial.insert("MAP", ParameterThreshold::new(100.0, 70.0, 65.0));
        registry.update(partial);

        let map = registry.get().get("MAP").expect("MAP present");
        assert_eq!(map.min, Some(100.0));
        assert_eq!(map.max, Some(70.0));
        assert_eq!(registry.get().get("HR"), ThresholdTable::clinical_defaults().get("HR"));
    }
}
