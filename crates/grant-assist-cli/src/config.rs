//! CLI configuration management.
//!
//! Values come from built-in defaults, then the JSON config file, then
//! environment variables (including a `.env` file), each layer overriding
//! the previous one.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::commands::OutputFormat;

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--format` is not given.
    pub default_format: OutputFormat,

    /// Directory for generated reports and demo snapshots.
    pub output_dir: PathBuf,

    /// Port for `ga serve`.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            output_dir: PathBuf::from("."),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents).with_context(|| "Failed to parse config file")?
            }
            _ => Self::default(),
        };

        if let Ok(format) = std::env::var("GA_FORMAT") {
            config.default_format = format
                .parse()
                .with_context(|| "Invalid GA_FORMAT environment variable")?;
        }
        if let Ok(output_dir) = std::env::var("GA_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }
        if let Ok(port) = std::env::var("GA_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid GA_PORT: {port}"))?;
        }

        Ok(config)
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file. `GA_CONFIG_DIR` overrides the
    /// platform config directory.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("GA_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.json"));
        }
        ProjectDirs::from("dev", "grant-assist", "ga")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "port": 8080 }"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_format_serializes_as_cli_name() {
        let config = Config {
            default_format: OutputFormat::Markdown,
            ..Config::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["default_format"], "md");
    }
}
