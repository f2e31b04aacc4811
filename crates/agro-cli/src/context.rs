use agro_config::AgroConfig;
use agro_registry::service::FleetService;
use anyhow::Context;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FleetService,
    pub config: AgroConfig,
}

impl AppContext {
    /// Load configuration, build the service and seed the default fleet.
    ///
    /// `--seed` wins over `simulation.seed`.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = AgroConfig::load_with_dotenv().context("failed to load agro configuration")?;
        Self::from_config(config, flags.seed)
    }

    /// Build the context from an already-loaded configuration.
    pub fn from_config(config: AgroConfig, seed_override: Option<u64>) -> anyhow::Result<Self> {
        let seed = seed_override.or(config.simulation.seed);
        let mut service = FleetService::new(seed);

        if config.general.seed_fleet {
            let inserted = service
                .initialize()
                .context("failed to seed the default fleet")?;
            tracing::debug!(inserted, "default fleet loaded");
        }

        Ok(Self { service, config })
    }
}
