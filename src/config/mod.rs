//! Configuration management for the drills tools.
//!
//! Lookup order: explicit path, then `$DRILLS_CONFIG`, then
//! `~/.config/drills/config.yaml` when present, else built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "DRILLS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub temperature: TemperatureConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// Per-run overrides collected from command-line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: Option<String>,
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration using the standard lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::load_from(&path)
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(min) = overrides.min {
            self.temperature.min = min;
        }
        if let Some(max) = overrides.max {
            self.temperature.max = max;
        }
        if let Some(unit) = overrides.unit {
            self.temperature.unit = unit;
        }
        if overrides.seed.is_some() {
            self.quiz.seed = overrides.seed;
        }

        self.validate()?;
        Ok(self)
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

/// Pick the config file to load, if any.
/// An explicit path or `$DRILLS_CONFIG` is returned even if missing, so the
/// read error surfaces; the home-directory file is only used when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    global_config_path().filter(|p| p.exists())
}

/// Returns the path to the global config file at ~/.config/drills/config.yaml
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/drills/config.yaml"))
}
