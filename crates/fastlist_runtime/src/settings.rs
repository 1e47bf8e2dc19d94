//! Runner settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

/// Environment variable naming a settings file when no CLI path is given.
pub const SETTINGS_ENV: &str = "FASTLIST_SETTINGS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub log_level: String,
    /// Capacity the growth run starts from.
    pub initial_capacity: usize,
    /// Number of elements appended during the growth run.
    pub growth_samples: usize,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            initial_capacity: 0,
            growth_samples: 1000,
        }
    }
}

impl RunnerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve settings from the first CLI argument, then `FASTLIST_SETTINGS`,
    /// then defaults.
    pub fn resolve(cli_path: Option<String>) -> Result<Self> {
        match cli_path.or_else(|| env::var(SETTINGS_ENV).ok()) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
