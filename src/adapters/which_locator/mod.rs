//! Tool locator adapter
//!
//! Resolves the pipeline tools inside the configured tool directory using the
//! `which` crate. A tool path containing a directory component is checked
//! relative to the current directory; an empty tool directory falls back to a
//! `PATH` search.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::model::{PipelineConfig, Tool, ToolNames};
use crate::error::{EpmuxError, EpmuxResult};
use crate::ports::ToolLocator;

/// `which`-based tool locator
#[derive(Debug, Clone)]
pub struct WhichLocator {
    tool_dir: PathBuf,
    tools: ToolNames,
}

impl WhichLocator {
    /// Create a locator for the given tool directory and executable names
    pub fn new(tool_dir: impl Into<PathBuf>, tools: ToolNames) -> Self {
        Self {
            tool_dir: tool_dir.into(),
            tools,
        }
    }

    /// Create a locator from pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(&config.tool_dir, config.tools.clone())
    }
}

impl ToolLocator for WhichLocator {
    fn locate(&self, tool: Tool) -> EpmuxResult<PathBuf> {
        let file_name = self.tools.file_name(tool);
        let candidate = self.tool_dir.join(file_name);

        match which::which(&candidate) {
            Ok(path) => {
                debug!(%tool, path = %path.display(), "Resolved tool");
                Ok(path)
            }
            Err(source) => Err(EpmuxError::ToolNotFound {
                tool: file_name.to_string(),
                dir: self.tool_dir.clone(),
                source,
            }),
        }
    }
}
