//! # agro-config
//!
//! Layered configuration loading for the agro registry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGRO_*` prefix, `__` as separator)
//! 2. Project-level `.agro/config.toml`
//! 3. User-level `~/.config/agro/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGRO_GENERAL__LOG_TAIL` -> `general.log_tail` and
//! `AGRO_SIMULATION__SEED` -> `simulation.seed`.
//!
//! # Usage
//!
//! ```no_run
//! use agro_config::AgroConfig;
//!
//! let config = AgroConfig::load_with_dotenv().expect("config");
//! println!("showing {} log entries", config.general.log_tail);
//! ```

mod error;
mod general;
mod simulation;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use simulation::SimulationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AgroConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl AgroConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`AgroConfig::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`AgroConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".agro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("AGRO_").split("__"))
    }

    /// Reject values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agro").join("config.toml"))
    }
}
