//! Ordered in-memory store of equipment records.

use agro_core::entities::Equipment;
use agro_core::errors::CoreError;

use crate::seed;

/// Equipment records in insertion order, unique by identity code.
///
/// Lookups are linear scans. The fleet is a dozen records, and insertion order
/// is part of the observable contract (listing, name search, stable sort).
#[derive(Debug, Default)]
pub struct EquipmentRegistry {
    records: Vec<Equipment>,
}

impl EquipmentRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record unless its code is already taken (case-insensitive).
    ///
    /// Returns whether the record was inserted.
    pub fn add(&mut self, equipment: Equipment) -> bool {
        if self.records.iter().any(|existing| existing == &equipment) {
            tracing::warn!(code = %equipment.code(), "duplicate equipment code rejected");
            return false;
        }
        tracing::debug!(code = %equipment.code(), kind = %equipment.kind(), "equipment registered");
        self.records.push(equipment);
        true
    }

    /// Insert the fixed fleet. Returns how many records were new.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if a seed record fails validation.
    pub fn seed_defaults(&mut self) -> Result<usize, CoreError> {
        let mut inserted = 0;
        for equipment in seed::default_fleet()? {
            if self.add(equipment) {
                inserted += 1;
            }
        }
        tracing::debug!(inserted, "default fleet seeded");
        Ok(inserted)
    }

    /// Every record, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Equipment> {
        self.records.iter().collect()
    }

    /// First record whose code matches, ignoring case.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Equipment> {
        self.records
            .iter()
            .find(|equipment| equipment.code().matches(code))
    }

    pub fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Equipment> {
        self.records
            .iter_mut()
            .find(|equipment| equipment.code().matches(code))
    }

    /// Records whose display name contains `text`, ignoring case.
    ///
    /// An empty needle matches every record.
    #[must_use]
    pub fn find_by_name_contains(&self, text: &str) -> Vec<&Equipment> {
        let needle = text.to_lowercase();
        self.records
            .iter()
            .filter(|equipment| equipment.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Records in ascending power draw. Equal draws keep insertion order.
    #[must_use]
    pub fn sorted_by_power(&self) -> Vec<&Equipment> {
        let mut sorted = self.list_all();
        sorted.sort_by(|a, b| a.cmp_power(b));
        sorted
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Equipment> {
        self.records.iter()
    }
}
