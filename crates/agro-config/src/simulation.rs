//! Simulated telemetry configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Fixed RNG seed. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}
