//! epmux CLI
//!
//! Turns one episode's FLV into a clean MKV using flvextract, mkvmerge and
//! mkclean.
//!
//! # Usage
//!
//! ```bash
//! epmux.exe run --show "the office" --season 2 --episode 5 --description "The Client"
//! epmux.exe split --token "The Office - S02E05 - The Client"
//! epmux.exe name --show lost --season 12 --episode 5.5 --description "name:unknown"
//! epmux.exe tools --json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use epmux_cli::adapters::{init_logging, LogFormat, LogLevel};
use epmux_cli::cli::{commands, Cli, Commands};
use epmux_cli::config_initialization::initialize_configuration_hierarchy;
use epmux_cli::domain::model::PipelineConfig;

/// Main entry point for the epmux CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = LogLevel::parse(&cli.log_level)?;
    let format: LogFormat = cli.log_format.parse()?;
    init_logging(level, format);

    info!("Starting epmux");

    // Name generation never touches tools or config
    let config = if matches!(cli.command, Commands::Name(_)) {
        PipelineConfig::default()
    } else {
        initialize_configuration_hierarchy(&cli)?
    };

    // Execute the requested command
    match cli.command {
        Commands::Run(args) => {
            info!("Executing run command");
            commands::run(config, args)?;
        }
        Commands::Split(args) => {
            info!("Executing split command");
            commands::split(config, args)?;
        }
        Commands::Merge(args) => {
            info!("Executing merge command");
            commands::merge(config, args)?;
        }
        Commands::Clean(args) => {
            info!("Executing clean command");
            commands::clean(config, args)?;
        }
        Commands::Name(args) => {
            commands::name(args)?;
        }
        Commands::Tools(args) => {
            info!("Executing tools command");
            commands::tools(config, args)?;
        }
    }

    info!("epmux completed successfully");
    Ok(())
}
