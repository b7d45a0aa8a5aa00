//! External process adapter
//!
//! Runs a pipeline tool as a child process and blocks until it exits. The
//! child inherits stdout and stderr so tool progress stays visible; stdin is
//! closed.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::model::Tool;
use crate::error::{EpmuxError, EpmuxResult};
use crate::ports::ProcessRunner;

/// `std::process` based runner
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Name used in errors: the executable's file name, else the stage name
fn tool_label(tool: Tool, program: &Path) -> String {
    program
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| tool.stage().to_string())
}

impl ProcessRunner for SystemRunner {
    fn run(&self, tool: Tool, program: &Path, args: &[OsString]) -> EpmuxResult<()> {
        let label = tool_label(tool, program);
        debug!(
            %tool,
            program = %program.display(),
            args = ?args,
            "Starting external tool"
        );

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| EpmuxError::SpawnFailed {
                tool: label.clone(),
                source,
            })?;

        let status = child.wait().map_err(|source| EpmuxError::WaitFailed {
            tool: label.clone(),
            source,
        })?;

        if !status.success() {
            return Err(EpmuxError::ToolFailed {
                tool: label,
                code: status.code(),
            });
        }

        info!(%tool, "External tool finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_label_prefers_file_name() {
        assert_eq!(
            tool_label(Tool::Merge, Path::new("engine").join("mkvmerge.exe").as_path()),
            "mkvmerge.exe"
        );
        assert_eq!(tool_label(Tool::Clean, Path::new("")), "clean");
    }

    #[test]
    fn test_spawn_failure_for_missing_program() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let program = temp_dir.path().join("does-not-exist");

        let err = SystemRunner::new()
            .run(Tool::Extract, &program, &[])
            .unwrap_err();
        assert!(matches!(err, EpmuxError::SpawnFailed { .. }), "{:?}", err);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_tool_failure() {
        let err = SystemRunner::new()
            .run(Tool::Merge, Path::new("/bin/sh"), &["-c".into(), "exit 3".into()])
            .unwrap_err();
        match err {
            EpmuxError::ToolFailed { tool, code } => {
                assert_eq!(tool, "sh");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit() {
        SystemRunner::new()
            .run(Tool::Clean, Path::new("/bin/sh"), &["-c".into(), "exit 0".into()])
            .unwrap();
    }
}
