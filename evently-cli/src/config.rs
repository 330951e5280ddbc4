use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration at ~/.config/evently/config.toml
///
/// Every key is optional; a missing file means the built-in sample events
/// and no default group.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// JSON file holding an array of event records
    pub events_file: Option<String>,

    /// Owner used by `evently new` when --group is not given
    pub default_group: Option<String>,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("evently");

        Ok(config_dir.join("config.toml"))
    }

    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_deref().map(expand_path)
    }
}

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
