// Domain models - Core types and data structures

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Base file name shared by every artifact of one episode run.
///
/// Tokens are not validated here; `EpisodeName` is the only producer that
/// guarantees a filesystem-safe value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Files produced and consumed while processing one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Source Flash video container
    Flv,
    /// H.264 elementary video stream
    Video,
    /// AAC elementary audio stream
    Audio,
    /// ASS subtitle track
    Subtitle,
    /// Timecode text written by the extractor
    Timecodes,
    /// Matroska container
    Mkv,
}

impl Artifact {
    /// Intermediates that the merge stage supersedes, in removal order
    pub const INTERMEDIATES: [Artifact; 5] = [
        Artifact::Subtitle,
        Artifact::Video,
        Artifact::Timecodes,
        Artifact::Audio,
        Artifact::Flv,
    ];

    /// File extension for this artifact
    pub fn extension(&self) -> &'static str {
        match self {
            Artifact::Flv => "flv",
            Artifact::Video => "264",
            Artifact::Audio => "aac",
            Artifact::Subtitle => "ass",
            Artifact::Timecodes => "txt",
            Artifact::Mkv => "mkv",
        }
    }
}

/// External tools driven by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// FLV demuxer (flvextract)
    Extract,
    /// Matroska muxer (mkvmerge)
    Merge,
    /// Matroska optimizer (mkclean)
    Clean,
}

impl Tool {
    /// All tools in pipeline order
    pub const ALL: [Tool; 3] = [Tool::Extract, Tool::Merge, Tool::Clean];

    /// Stage name used in logs and errors
    pub fn stage(&self) -> &'static str {
        match self {
            Tool::Extract => "split",
            Tool::Merge => "merge",
            Tool::Clean => "clean",
        }
    }

    /// Default executable name, with the platform suffix
    pub fn default_file_name(&self) -> String {
        let stem = match self {
            Tool::Extract => "flvextract",
            Tool::Merge => "mkvmerge",
            Tool::Clean => "mkclean",
        };
        format!("{}{}", stem, std::env::consts::EXE_SUFFIX)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stage())
    }
}

/// Concrete artifact paths for a token inside a working directory
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    work_dir: PathBuf,
    token: Token,
}

impl ArtifactPaths {
    pub fn new(work_dir: impl Into<PathBuf>, token: Token) -> Self {
        Self {
            work_dir: work_dir.into(),
            token,
        }
    }

    /// `<work_dir>/<token>.<ext>`
    pub fn artifact(&self, artifact: Artifact) -> PathBuf {
        self.work_dir
            .join(format!("{}.{}", self.token, artifact.extension()))
    }

    /// Output written by the optimizer: `<work_dir>/clean.<token>.mkv`
    pub fn cleaned(&self) -> PathBuf {
        self.work_dir.join(format!(
            "clean.{}.{}",
            self.token,
            Artifact::Mkv.extension()
        ))
    }
}

/// Executable file names inside the tool directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolNames {
    pub extract: String,
    pub merge: String,
    pub clean: String,
}

impl ToolNames {
    pub fn file_name(&self, tool: Tool) -> &str {
        match tool {
            Tool::Extract => &self.extract,
            Tool::Merge => &self.merge,
            Tool::Clean => &self.clean,
        }
    }
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            extract: Tool::Extract.default_file_name(),
            merge: Tool::Merge.default_file_name(),
            clean: Tool::Clean.default_file_name(),
        }
    }
}

/// Locations shared by every stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding the external tool executables
    pub tool_dir: PathBuf,
    /// Directory holding every intermediate and final artifact
    pub work_dir: PathBuf,
    /// Executable names inside `tool_dir`
    pub tools: ToolNames,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tool_dir: PathBuf::from("engine"),
            work_dir: PathBuf::from("temp"),
            tools: ToolNames::default(),
        }
    }
}

impl PipelineConfig {
    /// Expected location of a tool, before resolution
    pub fn tool_path(&self, tool: Tool) -> PathBuf {
        self.tool_dir.join(self.tools.file_name(tool))
    }

    /// Artifact paths for a token in the working directory
    pub fn artifacts(&self, token: &Token) -> ArtifactPaths {
        ArtifactPaths::new(&self.work_dir, token.clone())
    }
}

#[cfg(test)]
mod tests;
