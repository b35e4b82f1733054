//! Configuration loading and parsing
//!
//! Optional config.toml for replay runs that outgrow plain CLI flags:
//! input log, property filtering and table output settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub filtering: FilteringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Recorded property log to replay
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FilteringConfig {
    /// Only replay these property identifiers (None = all)
    pub property_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub table: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table: true,
            format: OutputFormat::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            log_file = "drive.jsonl"

            [filtering]
            property_ids = [289408001, 289408009]

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.log_file, PathBuf::from("drive.jsonl"));
        assert_eq!(
            config.filtering.property_ids,
            Some(vec![289408001, 289408009])
        );
        assert!(config.output.table);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_sections_default() {
        let toml_content = r#"
            [input]
            log_file = "drive.jsonl"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.filtering.property_ids, None);
        assert!(config.output.table);
        assert_eq!(config.output.format, OutputFormat::Txt);
    }
}
