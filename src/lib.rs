//! epmux Library
//!
//! Post-processes a single episode: splits an FLV into elementary streams,
//! merges them with the subtitle track into an MKV, then optimizes the MKV.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use app::{PipelineInteractor, ToolStatus};
pub use domain::model::{Artifact, ArtifactPaths, PipelineConfig, Tool, ToolNames, Token};
pub use domain::rules::{episode_file_name, sanitize_file_name, EpisodeName};
pub use error::{EpmuxError, EpmuxResult};
