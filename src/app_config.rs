use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::transcript_format::FormatChoice;

/// Application configuration module
/// Defaults for the cleaner, optionally loaded from a JSON file and then
/// overridden from the command line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Format to strip, or auto-detect per file
    #[serde(default)]
    pub format: FormatChoice,

    /// Prefix prepended to the input file name to form the output name
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file, `null` for console-only logging
    #[serde(default = "default_log_file")]
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: FormatChoice::default(),
            output_prefix: default_output_prefix(),
            log_level: LogLevel::default(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()
            .context("Configuration validation failed")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_prefix.is_empty() {
            return Err(anyhow!("Output prefix must not be empty"));
        }

        if self.output_prefix.contains(['/', '\\']) {
            return Err(anyhow!(
                "Output prefix must not contain path separators: {}",
                self.output_prefix
            ));
        }

        if let Some(log_file) = &self.log_file {
            if log_file.trim().is_empty() {
                return Err(anyhow!("Log file path must not be blank; use null to disable file logging"));
            }
        }

        Ok(())
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_prefix() -> String {
    "cleaned_".to_string()
}

fn default_log_file() -> Option<String> {
    Some("transcript_cleaning.log".to_string())
}
