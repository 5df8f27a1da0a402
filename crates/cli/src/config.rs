//! Configuration loading and representation.

use std::path::PathBuf;

use anyhow::Context;
use babykit_observability::LogFormat;

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "BABYKIT_DATA_DIR";
/// Selects `text` or `json` log lines.
pub const LOG_FORMAT_ENV: &str = "BABYKIT_LOG_FORMAT";

const APP_DIR: &str = "babykit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the key-value files.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Resolve from the process environment.
    pub fn load(data_dir_flag: Option<PathBuf>) -> anyhow::Result<Self> {
        Self::from_sources(data_dir_flag, |key| std::env::var(key).ok())
    }

    /// Flag beats environment beats the OS data directory.
    pub fn from_sources(
        data_dir_flag: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let data_dir = match data_dir_flag {
            Some(dir) => dir,
            None => match env(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
                Some(dir) => PathBuf::from(dir),
                None => default_data_dir()?,
            },
        };

        let log_format = match env(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {LOG_FORMAT_ENV}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            data_dir,
            log_format,
        })
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;
    dir.push(APP_DIR);
    Ok(dir)
}
