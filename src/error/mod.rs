//! Error handling module for epmux

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for epmux operations
#[derive(Error, Debug)]
pub enum EpmuxError {
    /// External tool could not be resolved to an executable
    #[error("Unable to find {tool} in {} directory", dir.display())]
    ToolNotFound {
        tool: String,
        dir: PathBuf,
        #[source]
        source: which::Error,
    },

    /// External tool could not be started
    #[error("There was an error while executing {tool}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on a running tool failed
    #[error("There was an error while waiting for {tool}")]
    WaitFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool exited unsuccessfully
    #[error("{tool} exited with {}", exit_code_label(*code))]
    ToolFailed { tool: String, code: Option<i32> },

    /// A tool reported success but its output is not on disk
    #[error("Expected output was not found after {stage}: {}", path.display())]
    OutputMissing { stage: &'static str, path: PathBuf },

    /// Reading from the console failed
    #[error("There was an error getting standard user input")]
    InputFailed {
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Filesystem operation failed
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl EpmuxError {
    /// Create a filesystem error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type alias for epmux operations
pub type EpmuxResult<T> = std::result::Result<T, EpmuxError>;
