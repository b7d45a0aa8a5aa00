// TOML config adapter - Pipeline configuration from TOML files

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::model::PipelineConfig;
use crate::error::{EpmuxError, EpmuxResult};

/// Config file looked up in the current directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "epmux.toml";

/// On-disk layout: every setting lives under an `[epmux]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    epmux: PipelineConfig,
}

/// TOML configuration adapter
#[derive(Debug, Default)]
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Create new TOML config adapter
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from `file_path`.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load_config(&self, file_path: &Path) -> EpmuxResult<PipelineConfig> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            EpmuxError::config(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let config = Self::deserialize_config(&content)?;
        info!(path = %file_path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `file_path` when given, else the default file if it exists, else defaults
    pub fn load_or_default(&self, file_path: Option<&Path>) -> EpmuxResult<PipelineConfig> {
        if let Some(path) = file_path {
            return self.load_config(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return self.load_config(default_path);
        }

        info!("No config file found, using defaults");
        Ok(PipelineConfig::default())
    }

    /// Deserialize config from TOML string
    pub fn deserialize_config(toml_content: &str) -> EpmuxResult<PipelineConfig> {
        let file: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| EpmuxError::config(format!("Failed to parse TOML config: {}", e)))?;
        Ok(file.epmux)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ToolNames;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TomlConfigAdapter::deserialize_config("").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = TomlConfigAdapter::deserialize_config(
            r#"
            [epmux]
            work_dir = "D:/scratch"

            [epmux.tools]
            merge = "mkvmerge-64.exe"
            "#,
        )
        .unwrap();

        assert_eq!(config.work_dir, PathBuf::from("D:/scratch"));
        assert_eq!(config.tool_dir, PathBuf::from("engine"));
        assert_eq!(config.tools.merge, "mkvmerge-64.exe");
        assert_eq!(config.tools.extract, ToolNames::default().extract);
    }

    #[test]
    fn test_invalid_document_is_config_error() {
        let err = TomlConfigAdapter::deserialize_config("[epmux]\nwork_dir = 5\n").unwrap_err();
        assert!(matches!(err, EpmuxError::Config { .. }));
    }

    #[test]
    fn test_load_config_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("epmux.toml");
        std::fs::write(&path, "[epmux]\ntool_dir = \"bin\"\n").unwrap();

        let config = TomlConfigAdapter::new().load_config(&path).unwrap();
        assert_eq!(config.tool_dir, PathBuf::from("bin"));
        assert_eq!(config.work_dir, PipelineConfig::default().work_dir);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = TomlConfigAdapter::new()
            .load_config(&temp_dir.path().join("missing.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
