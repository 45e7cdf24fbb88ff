use anyhow::Context;

use komplex_config::KomplexConfig;
use komplex_db::service::KomplexService;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KomplexConfig> {
    let mut config = KomplexConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(store) = &flags.store {
        config.storage.path.clone_from(store);
    }
    Ok(config)
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: KomplexService,
    pub config: KomplexConfig,
}

impl AppContext {
    pub fn init(config: KomplexConfig) -> anyhow::Result<Self> {
        let service = KomplexService::open(&config)?;
        tracing::debug!(
            store = %config.storage.path,
            namespace = %config.storage.namespace,
            trail = config.trail.enabled,
            "application context ready"
        );
        Ok(Self { service, config })
    }
}
