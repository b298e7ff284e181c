use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::ExtractionOptions;
use crate::{ExportFormat, OutputMode};

/// User configuration for docx2json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for every extraction call
    pub extraction: ExtractionOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub mode: OutputMode,
    pub format: ExportFormat,
}

impl Config {
    /// Load config from the config directory, or defaults if there is none
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Load config from an explicit path, which must exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", config_path.display()))?;
        Ok(config)
    }

    /// Write config to `config_path`, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the path to the default config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docx2json").join("config.toml"))
    }

    /// Write the default config to the config directory and return its path
    pub fn init_default() -> Result<PathBuf> {
        let config_path =
            Self::get_config_path().context("no config directory on this platform")?;
        Config::default().save_to(&config_path)?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{BlankRunCollapse, FlattenPolicy};

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [extraction]
            include_tables = false
            "#,
        )
        .unwrap();

        assert!(!config.extraction.include_tables);
        assert_eq!(config.extraction.column_separator, " | ");
        assert_eq!(config.output.mode, OutputMode::Paras);
        assert_eq!(config.output.format, ExportFormat::Csv);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [extraction]
            flatten_policy = "row-per-line"
            column_separator = " ; "
            cell_join = " / "
            collapse_blank_runs = { collapse-to-max = 2 }

            [output]
            mode = "rows"
            format = "jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.extraction.flatten_policy, FlattenPolicy::RowPerLine);
        assert_eq!(config.extraction.cell_join(), " / ");
        assert_eq!(
            config.extraction.collapse_blank_runs,
            BlankRunCollapse::CollapseToMax(2)
        );
        assert_eq!(config.output.mode, OutputMode::Rows);
        assert_eq!(config.output.format, ExportFormat::Jsonl);
    }

    #[test]
    fn test_unit_collapse_modes() {
        let config: Config =
            toml::from_str("[extraction]\ncollapse_blank_runs = \"off\"\n").unwrap();
        assert_eq!(config.extraction.collapse_blank_runs, BlankRunCollapse::Off);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.extraction.include_tables = false;
        config.output.mode = OutputMode::Value;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
