//! CLI module for epmux
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// epmux episode remuxer
///
/// Splits an episode's FLV into elementary streams, merges them with the
/// subtitle track into an MKV, then optimizes the MKV for playback.
#[derive(Parser, Debug)]
#[command(name = "epmux")]
#[command(about = "epmux - FLV to clean MKV episode pipeline")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Log output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub log_format: String,

    /// Configuration file (defaults to ./epmux.toml when present)
    #[arg(long, env = "EPMUX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing flvextract, mkvmerge and mkclean
    #[arg(long, env = "EPMUX_TOOL_DIR", global = true)]
    pub tool_dir: Option<PathBuf>,

    /// Directory holding intermediate and final files
    #[arg(long, env = "EPMUX_WORK_DIR", global = true)]
    pub work_dir: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split, merge and clean one episode
    Run(args::RunArgs),
    /// Extract elementary streams from <token>.flv
    Split(args::TokenArgs),
    /// Merge elementary streams into <token>.mkv
    Merge(args::TokenArgs),
    /// Optimize <token>.mkv for playback
    Clean(args::TokenArgs),
    /// Print the file name for an episode
    Name(args::NameArgs),
    /// Check that the external tools can be found
    Tools(args::ToolsArgs),
}
