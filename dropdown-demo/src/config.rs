//! Demo configuration, read from `config.toml`.
//!
//! ```toml
//! log_level = "debug"
//! single_title = "Country"
//! multiple_title = "Languages"
//!
//! [[options]]
//! label = "Germany"
//! value = "de"
//!
//! [[options]]
//! label = "Answer"
//! value = 42
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use dropdown::{OptionValue, SelectOption};
use serde::Deserialize;
use simplelog::LevelFilter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config lists no options")]
    NoOptions,
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionEntry {
    pub label: String,
    pub value: OptionValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_level: String,
    pub single_title: String,
    pub multiple_title: String,
    pub options: Vec<OptionEntry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let options = [
            ("United States", "us"),
            ("United Kingdom", "uk"),
            ("Germany", "de"),
            ("France", "fr"),
            ("Japan", "jp"),
        ]
        .into_iter()
        .map(|(label, value)| OptionEntry {
            label: label.into(),
            value: value.into(),
        })
        .collect();

        Self {
            log_level: "debug".into(),
            single_title: "Country".into(),
            multiple_title: "Visited".into(),
            options,
        }
    }
}

impl DemoConfig {
    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(text)?;
        if config.options.is_empty() {
            return Err(ConfigError::NoOptions);
        }
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Build the shared options both selects pick from.
    pub fn select_options(&self) -> Vec<Arc<SelectOption>> {
        self.options
            .iter()
            .map(|entry| SelectOption::new(entry.label.as_str(), entry.value.clone()))
            .collect()
    }
}
