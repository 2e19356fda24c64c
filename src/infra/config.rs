// src/infra/config.rs — Configuration loading (TOML)

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::timing::{TimingConfig, DEFAULT_BATCH_TIME_MS, DEFAULT_YIELD_DELAY_MS};
use crate::infra::paths;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingToml,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[timing]` section; millisecond values mirror `TimingConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingToml {
    #[serde(default = "default_yield_delay_ms")]
    pub yield_delay_ms: u64,
    #[serde(default = "default_batch_time_ms")]
    pub batch_time_ms: u64,
}

impl Default for TimingToml {
    fn default() -> Self {
        Self {
            yield_delay_ms: DEFAULT_YIELD_DELAY_MS,
            batch_time_ms: DEFAULT_BATCH_TIME_MS,
        }
    }
}

fn default_yield_delay_ms() -> u64 {
    DEFAULT_YIELD_DELAY_MS
}

fn default_batch_time_ms() -> u64 {
    DEFAULT_BATCH_TIME_MS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

impl Config {
    /// Load config from the default location, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn timing(&self) -> TimingConfig {
        TimingConfig::from_millis(self.timing.yield_delay_ms, self.timing.batch_time_ms)
    }
}
