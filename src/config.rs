//! planstorm configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::SessionProfile;

/// Main planstorm configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brainstorm agent settings
    pub brainstorm: BrainstormConfig,

    /// Plan agent settings
    pub plan: PlanConfig,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `.planstorm.yml` in the project directory,
    /// then `~/.config/planstorm/planstorm.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".planstorm.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("planstorm").join("planstorm.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Brainstorm session profile with this config applied
    pub fn brainstorm_profile(&self) -> SessionProfile {
        let mut profile = SessionProfile::brainstorm();
        profile.log_path = self.brainstorm.log_path.clone();
        profile.confirm_items = self.brainstorm.confirm_items;
        profile
    }

    /// Plan session profile with this config applied
    pub fn plan_profile(&self) -> SessionProfile {
        let mut profile = SessionProfile::plan();
        profile.log_path = self.plan.log_path.clone();
        profile.extract_items = self.plan.extract_items;
        profile.confirm_items = self.plan.confirm_items;
        profile
    }
}

/// Brainstorm agent settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainstormConfig {
    /// Session log path, relative to the project directory
    #[serde(rename = "log-path")]
    pub log_path: PathBuf,

    /// Ask before persisting each extracted idea
    #[serde(rename = "confirm-items")]
    pub confirm_items: bool,
}

impl Default for BrainstormConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(".aider/brainstorm/history.md"),
            confirm_items: true,
        }
    }
}

/// Plan agent settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Session log path, relative to the project directory
    #[serde(rename = "log-path")]
    pub log_path: PathBuf,

    /// Mine the host reply for `- [ ]` items (off by default; the
    /// plan reply normally stays in the host conversation)
    #[serde(rename = "extract-items")]
    pub extract_items: bool,

    /// Ask before persisting each extracted item
    #[serde(rename = "confirm-items")]
    pub confirm_items: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(".aider/plans/history.md"),
            extract_items: false,
            confirm_items: false,
        }
    }
}
