pub mod clear;
pub mod diagnose;
pub mod history;
pub mod init;
pub mod questions;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use stockcheck_core::config::{load_config_from, OutputFormat};
use stockcheck_core::store::LogStore;

/// Configuration resolved from the config file and global flags.
pub struct Settings {
    pub store: LogStore,
    pub output_format: OutputFormat,
}

impl Settings {
    pub fn resolve(config_path: Option<&Path>, log_file: Option<PathBuf>) -> Result<Self> {
        let config = load_config_from(config_path)?;
        let path = log_file.unwrap_or(config.log_file);
        debug!(log_file = %path.display(), format = %config.output_format, "resolved settings");

        Ok(Self {
            store: LogStore::new(path),
            output_format: config.output_format,
        })
    }

    /// The `--format` flag if given, otherwise the configured default.
    pub fn format(&self, flag: Option<&str>) -> Result<OutputFormat> {
        match flag {
            Some(f) => f.parse::<OutputFormat>().map_err(anyhow::Error::msg),
            None => Ok(self.output_format),
        }
    }
}

/// Print `prompt` and read one trimmed line. `None` on end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interpret a y/n answer. `None` for anything unrecognised.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "예" | "네" | "ㅇ" => Some(true),
        "n" | "no" | "아니오" | "아니요" | "ㄴ" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_parsing() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" yes "), Some(true));
        assert_eq!(parse_yes_no("예"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no(""), None);
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn prompt_line_reads_and_trims() {
        let mut input = "  삼성전자 \nnext\n".as_bytes();
        let mut out = Vec::new();
        let line = prompt_line(&mut input, &mut out, "종목명: ").unwrap();
        assert_eq!(line.as_deref(), Some("삼성전자"));
        assert_eq!(String::from_utf8(out).unwrap(), "종목명: ");
    }

    #[test]
    fn prompt_line_end_of_input() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut out, "> ").unwrap(), None);
    }

    #[test]
    fn flag_overrides_configured_format() {
        let settings = Settings {
            store: LogStore::new("x.csv"),
            output_format: OutputFormat::Json,
        };
        assert_eq!(settings.format(None).unwrap(), OutputFormat::Json);
        assert_eq!(settings.format(Some("table")).unwrap(), OutputFormat::Text);
        assert!(settings.format(Some("xml")).is_err());
    }
}
