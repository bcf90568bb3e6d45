use anyhow::Context;
use vox_config::VoxConfig;

/// Load `.env`, the TOML layers and `VOXTASK_*` overrides.
pub fn load_config() -> anyhow::Result<VoxConfig> {
    let config = VoxConfig::load_with_dotenv().context("failed to load voxtask configuration")?;
    tracing::debug!(
        format = %config.general.default_format,
        limit = config.general.default_limit,
        "configuration loaded"
    );
    Ok(config)
}
