//! Coordinator between the CLI and the registry.
//!
//! `FleetService` owns the `EquipmentRegistry` and the random source that
//! drives simulated readings and dose/altitude values. Query and capability
//! methods are implemented as `impl FleetService` blocks under `repos/`.

use agro_core::errors::CoreError;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::registry::EquipmentRegistry;

/// Registry plus random source. Single-threaded; every mutation goes through
/// `&mut self`.
pub struct FleetService {
    registry: EquipmentRegistry,
    rng: StdRng,
}

impl FleetService {
    /// Create a service over an empty registry.
    ///
    /// `seed` makes every simulated value reproducible. `None` seeds from
    /// the operating system.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_registry(EquipmentRegistry::new(), rng)
    }

    /// Wrap an existing registry (for testing).
    #[must_use]
    pub const fn from_registry(registry: EquipmentRegistry, rng: StdRng) -> Self {
        Self { registry, rng }
    }

    /// Populate the fixed fleet. Returns how many records were inserted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if a seed record fails validation.
    pub fn initialize(&mut self) -> Result<usize, CoreError> {
        let inserted = self.registry.seed_defaults()?;
        tracing::info!(inserted, total = self.registry.count(), "fleet initialized");
        Ok(inserted)
    }

    #[must_use]
    pub const fn registry(&self) -> &EquipmentRegistry {
        &self.registry
    }

    pub const fn registry_mut(&mut self) -> &mut EquipmentRegistry {
        &mut self.registry
    }

    /// Split borrow used by the capability methods.
    pub(crate) const fn parts_mut(&mut self) -> (&mut EquipmentRegistry, &mut StdRng) {
        (&mut self.registry, &mut self.rng)
    }
}
