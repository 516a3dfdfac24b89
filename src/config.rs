//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gof-demo/gof-demo.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `GOFDEMO_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for gof-demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pattern run when `run` gets no selector (default: prototype)
    pub default_pattern: String,
    /// Indent unit for view listings, repeated twice per level (default: "-")
    pub indent: String,
    /// Colored terminal output (default: true)
    pub color: bool,
    /// Hierarchy TOML used by `tree` and `view` instead of the built-in sample
    pub hierarchy_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_pattern: "prototype".into(),
            indent: "-".into(),
            color: true,
            hierarchy_file: None,
        }
    }
}

/// Raw settings for intermediate parsing; `None` means "inherit from the layer below".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_pattern: Option<String>,
    pub indent: Option<String>,
    pub color: Option<bool>,
    pub hierarchy_file: Option<PathBuf>,
}

/// Get the XDG config directory for gof-demo.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gof-demo").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gof-demo.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in the hierarchy path.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.hierarchy_file {
            let raw = path.to_string_lossy();
            let expanded = shellexpand::full(raw.as_ref())
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            self.hierarchy_file = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_pattern: overlay
                .default_pattern
                .clone()
                .unwrap_or_else(|| self.default_pattern.clone()),
            indent: overlay.indent.clone().unwrap_or_else(|| self.indent.clone()),
            color: overlay.color.unwrap_or(self.color),
            hierarchy_file: overlay
                .hierarchy_file
                .clone()
                .or_else(|| self.hierarchy_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply GOFDEMO_* environment variables as explicit overrides.
    ///
    /// `GOFDEMO_DEFAULT_PATTERN` sets `default_pattern`; `__` separates nested keys.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("GOFDEMO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_pattern") {
            settings.default_pattern = val;
        }
        if let Ok(val) = config.get_string("indent") {
            settings.indent = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("hierarchy_file") {
            settings.hierarchy_file = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
