//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Logbook entries shown after exercising a record.
const fn default_log_tail() -> usize {
    5
}

const fn default_seed_fleet() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// How many of the newest logbook entries to show. Must be at least 1.
    #[serde(default = "default_log_tail")]
    pub log_tail: usize,

    /// Populate the fixed fleet at startup.
    #[serde(default = "default_seed_fleet")]
    pub seed_fleet: bool,
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.log_tail == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.log_tail".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_tail: default_log_tail(),
            seed_fleet: default_seed_fleet(),
        }
    }
}
