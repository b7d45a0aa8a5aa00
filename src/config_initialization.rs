//! Configuration initialization and hierarchy management

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::cli::Cli;
use crate::domain::model::PipelineConfig;

/// Resolve configuration following precedence: CLI > Env > File > Defaults.
///
/// Environment variables reach this function through clap, which fills the
/// `--tool-dir`, `--work-dir` and `--config` flags from `EPMUX_*` when the flags
/// are absent.
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<PipelineConfig> {
    info!("Initializing configuration hierarchy");

    let config = TomlConfigAdapter::new()
        .load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let config = apply_cli_configuration_overrides(config, cli);
    info!(
        tool_dir = %config.tool_dir.display(),
        work_dir = %config.work_dir.display(),
        "Configuration resolved"
    );
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_configuration_overrides(mut config: PipelineConfig, cli: &Cli) -> PipelineConfig {
    if let Some(tool_dir) = &cli.tool_dir {
        info!("CLI override: tool_dir = {}", tool_dir.display());
        config.tool_dir = tool_dir.clone();
    }
    if let Some(work_dir) = &cli.work_dir {
        info!("CLI override: work_dir = {}", work_dir.display());
        config.work_dir = work_dir.clone();
    }
    config
}
