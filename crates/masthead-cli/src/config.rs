//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Get the config file path, honouring `MASTHEAD_CONFIG` when set
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os("MASTHEAD_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("masthead")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Roster file used when `--roster` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Load the config file, falling back to defaults if it is missing or
    /// unreadable
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Wrote config to {}", path.display());
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["roster", "format"]
    }

    fn check_key(key: &str) -> anyhow::Result<()> {
        if Self::keys().iter().any(|k| *k == key) {
            return Ok(());
        }
        anyhow::bail!(
            "Unknown config key: {} (available: {})",
            key,
            Self::keys().join(", ")
        )
    }

    /// The value of `key` as shown to a user, `(not set)` when absent
    pub fn display_value(&self, key: &str) -> anyhow::Result<String> {
        Self::check_key(key)?;
        Ok(self.get(key).unwrap_or_else(|| "(not set)".to_string()))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "roster" => self.roster.as_ref().map(|p| p.display().to_string()),
            "format" => self.format.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "roster" => self.roster = Some(PathBuf::from(value)),
            "format" => {
                let format: OutputFormat = value.parse()?;
                self.format = Some(format.to_string());
            }
            other => Self::check_key(other)?,
        }
        Ok(())
    }
}
