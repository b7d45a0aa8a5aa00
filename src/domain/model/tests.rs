// Unit tests for domain models

use super::*;
use std::path::Path;

#[test]
fn test_artifact_paths_join_token_and_extension() {
    let paths = ArtifactPaths::new("temp", Token::from("Lost - S01E01 - Pilot"));
    assert_eq!(
        paths.artifact(Artifact::Video),
        Path::new("temp").join("Lost - S01E01 - Pilot.264")
    );
    assert_eq!(
        paths.artifact(Artifact::Mkv),
        Path::new("temp").join("Lost - S01E01 - Pilot.mkv")
    );
}

#[test]
fn test_cleaned_path_uses_prefix() {
    let paths = ArtifactPaths::new("work", Token::from("show"));
    assert_eq!(paths.cleaned(), Path::new("work").join("clean.show.mkv"));
}

#[test]
fn test_intermediates_exclude_container() {
    assert_eq!(Artifact::INTERMEDIATES.len(), 5);
    assert!(!Artifact::INTERMEDIATES.contains(&Artifact::Mkv));

    let extensions: Vec<_> = Artifact::INTERMEDIATES
        .iter()
        .map(|a| a.extension())
        .collect();
    assert_eq!(extensions, vec!["ass", "264", "txt", "aac", "flv"]);
}

#[test]
fn test_tool_default_file_names() {
    let suffix = std::env::consts::EXE_SUFFIX;
    assert_eq!(Tool::Extract.default_file_name(), format!("flvextract{}", suffix));
    assert_eq!(Tool::Merge.default_file_name(), format!("mkvmerge{}", suffix));
    assert_eq!(Tool::Clean.default_file_name(), format!("mkclean{}", suffix));
}

#[test]
fn test_token_is_not_validated() {
    let token = Token::new("a:b");
    assert_eq!(token.as_str(), "a:b");
    assert_eq!(token.to_string(), "a:b");
}

#[test]
fn test_default_config_locations() {
    let config = PipelineConfig::default();
    assert_eq!(config.tool_dir, PathBuf::from("engine"));
    assert_eq!(config.work_dir, PathBuf::from("temp"));
    assert_eq!(
        config.tool_path(Tool::Merge),
        Path::new("engine").join(Tool::Merge.default_file_name())
    );
}

#[test]
fn test_config_artifacts_use_work_dir() {
    let config = PipelineConfig {
        work_dir: PathBuf::from("scratch"),
        ..PipelineConfig::default()
    };
    let paths = config.artifacts(&Token::from("ep"));
    assert_eq!(paths.artifact(Artifact::Audio), Path::new("scratch").join("ep.aac"));
}
