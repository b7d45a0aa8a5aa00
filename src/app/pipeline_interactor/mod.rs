// Pipeline interactor - Orchestrates the split, merge and clean stages

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::model::*;
use crate::error::{EpmuxError, EpmuxResult};
use crate::ports::*;

/// Arguments for the extraction tool
pub fn split_args(paths: &ArtifactPaths) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-v", "-a", "-t", "-o"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(paths.artifact(Artifact::Flv).into_os_string());
    args
}

/// Arguments for the merge tool
pub fn merge_args(paths: &ArtifactPaths) -> Vec<OsString> {
    vec![
        "-o".into(),
        paths.artifact(Artifact::Mkv).into_os_string(),
        "--language".into(),
        "0:eng".into(),
        paths.artifact(Artifact::Subtitle).into_os_string(),
        paths.artifact(Artifact::Video).into_os_string(),
        "--aac-is-sbr".into(),
        "0".into(),
        paths.artifact(Artifact::Audio).into_os_string(),
    ]
}

/// Arguments for the optimization tool
pub fn clean_args(paths: &ArtifactPaths) -> Vec<OsString> {
    vec![
        "--optimize".into(),
        paths.artifact(Artifact::Mkv).into_os_string(),
    ]
}

/// Availability of one external tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub stage: &'static str,
    pub expected_path: PathBuf,
    pub resolved_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        self.resolved_path.is_some()
    }
}

/// Interactor for the three-stage episode pipeline
pub struct PipelineInteractor {
    config: PipelineConfig,
    locator: Arc<dyn ToolLocator>,
    runner: Arc<dyn ProcessRunner>,
}

impl PipelineInteractor {
    /// Create new pipeline interactor with injected ports
    pub fn new(
        config: PipelineConfig,
        locator: Arc<dyn ToolLocator>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            config,
            locator,
            runner,
        }
    }

    /// Run split, merge and clean in order, stopping at the first failure.
    ///
    /// Returns the path of the final container.
    pub fn run(&self, token: &Token) -> EpmuxResult<PathBuf> {
        info!(%token, "Starting pipeline");
        self.split(token)?;
        self.merge(token)?;
        let output = self.clean(token)?;
        info!(%token, output = %output.display(), "Pipeline completed");
        Ok(output)
    }

    /// Split `<token>.flv` into elementary streams.
    ///
    /// The source file is not checked before the extractor runs.
    pub fn split(&self, token: &Token) -> EpmuxResult<()> {
        let paths = self.config.artifacts(token);
        info!(%token, "Splitting source container");

        self.invoke(Tool::Extract, &split_args(&paths))?;

        info!(%token, "Split completed");
        Ok(())
    }

    /// Merge subtitle, video and audio streams into `<token>.mkv`.
    ///
    /// Once the merge tool succeeds the five intermediates are removed, and only
    /// then is the merged container checked. A missing container therefore still
    /// leaves the intermediates deleted.
    pub fn merge(&self, token: &Token) -> EpmuxResult<PathBuf> {
        let paths = self.config.artifacts(token);
        info!(%token, "Merging elementary streams");

        self.invoke(Tool::Merge, &merge_args(&paths))?;

        for artifact in Artifact::INTERMEDIATES {
            remove_artifact(&paths.artifact(artifact));
        }

        let merged = paths.artifact(Artifact::Mkv);
        if !merged.is_file() {
            return Err(EpmuxError::OutputMissing {
                stage: Tool::Merge.stage(),
                path: merged,
            });
        }

        info!(%token, output = %merged.display(), "Merge completed");
        Ok(merged)
    }

    /// Optimize `<token>.mkv` for playback.
    ///
    /// The optimizer writes `clean.<token>.mkv`; that file is verified and then
    /// renamed over the merged container in one step, so the merged file stays
    /// in place if the cleaned output never appears.
    pub fn clean(&self, token: &Token) -> EpmuxResult<PathBuf> {
        let paths = self.config.artifacts(token);
        info!(%token, "Optimizing merged container");

        self.invoke(Tool::Clean, &clean_args(&paths))?;

        let cleaned = paths.cleaned();
        if !cleaned.is_file() {
            return Err(EpmuxError::OutputMissing {
                stage: Tool::Clean.stage(),
                path: cleaned,
            });
        }

        let merged = paths.artifact(Artifact::Mkv);
        std::fs::rename(&cleaned, &merged).map_err(|e| {
            EpmuxError::io(
                format!(
                    "Failed to replace {} with {}",
                    merged.display(),
                    cleaned.display()
                ),
                e,
            )
        })?;

        info!(%token, output = %merged.display(), "Clean completed");
        Ok(merged)
    }

    /// Resolve every tool without running anything
    pub fn check_tools(&self) -> Vec<ToolStatus> {
        Tool::ALL
            .iter()
            .map(|&tool| {
                let expected_path = self.config.tool_path(tool);
                match self.locator.locate(tool) {
                    Ok(path) => ToolStatus {
                        stage: tool.stage(),
                        expected_path,
                        resolved_path: Some(path),
                        error: None,
                    },
                    Err(e) => ToolStatus {
                        stage: tool.stage(),
                        expected_path,
                        resolved_path: None,
                        error: Some(error_chain(&e)),
                    },
                }
            })
            .collect()
    }

    fn invoke(&self, tool: Tool, args: &[OsString]) -> EpmuxResult<()> {
        let program = self.locator.locate(tool)?;
        self.runner.run(tool, &program, args)
    }
}

/// Delete an artifact; files that are already gone are fine
fn remove_artifact(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove intermediate file"),
    }
}

/// Render an error with its causes, `outer: inner: root`
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_split_args() {
        let paths = ArtifactPaths::new("temp", Token::from("ep"));
        let expected_flv = Path::new("temp").join("ep.flv");
        assert_eq!(
            strings(&split_args(&paths)),
            vec!["-v", "-a", "-t", "-o", &*expected_flv.to_string_lossy()]
        );
    }

    #[test]
    fn test_merge_args_order() {
        let paths = ArtifactPaths::new("temp", Token::from("ep"));
        let p = |ext: &str| {
            Path::new("temp")
                .join(format!("ep.{}", ext))
                .to_string_lossy()
                .into_owned()
        };
        assert_eq!(
            strings(&merge_args(&paths)),
            vec![
                "-o".to_string(),
                p("mkv"),
                "--language".to_string(),
                "0:eng".to_string(),
                p("ass"),
                p("264"),
                "--aac-is-sbr".to_string(),
                "0".to_string(),
                p("aac"),
            ]
        );
    }

    #[test]
    fn test_clean_args() {
        let paths = ArtifactPaths::new("temp", Token::from("ep"));
        let mkv = Path::new("temp").join("ep.mkv");
        assert_eq!(
            strings(&clean_args(&paths)),
            vec!["--optimize", &*mkv.to_string_lossy()]
        );
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = EpmuxError::io(
            "outer",
            std::io::Error::new(std::io::ErrorKind::Other, "inner"),
        );
        assert_eq!(error_chain(&err), "outer: inner");
    }
}
