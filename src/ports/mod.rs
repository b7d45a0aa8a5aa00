// Ports - Interface definitions (contracts)

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::model::Tool;
use crate::error::EpmuxResult;

/// Port for resolving external tools to executables
pub trait ToolLocator {
    /// Resolve the tool's executable path
    fn locate(&self, tool: Tool) -> EpmuxResult<PathBuf>;
}

/// Port for running an external process to completion
pub trait ProcessRunner {
    /// Start `program` with `args` and block until it exits successfully
    fn run(&self, tool: Tool, program: &Path, args: &[OsString]) -> EpmuxResult<()>;
}
