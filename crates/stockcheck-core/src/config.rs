//! stockcheck configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_LOG_FILE;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "stockcheck.toml";

/// How results and history are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text and tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level stockcheck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockcheckConfig {
    /// Path of the diagnosis log, relative to the working directory.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Default output format for `diagnose` and `history`.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for StockcheckConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            output_format: OutputFormat::default(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `stockcheck.toml` in the current directory
/// 2. `~/.config/stockcheck/config.toml`
///
/// Falls back to defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<StockcheckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StockcheckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(StockcheckConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("stockcheck"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = StockcheckConfig::default();
        assert_eq!(config.log_file, PathBuf::from("stock_diagnosis_history.csv"));
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn parse_partial_config() {
        let config: StockcheckConfig = toml::from_str(r#"output_format = "json""#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));

        let config: StockcheckConfig = toml::from_str(r#"log_file = "logs/mine.csv""#).unwrap();
        assert_eq!(config.log_file, PathBuf::from("logs/mine.csv"));
    }

    #[test]
    fn load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "log_file = \"a.csv\"\noutput_format = \"json\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.log_file, PathBuf::from("a.csv"));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "output_format = \"yaml\"").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
