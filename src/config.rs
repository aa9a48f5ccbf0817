//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/spacy/spacy.toml`
//! 3. Explicit config file passed to [`Settings::load_from`]
//! 4. Environment variables: `SPACY_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Interpreter used when nothing else is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Python module exposing the collaborator functions.
pub const DEFAULT_MODULE: &str = "spacy.cli";

/// Unified configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Python interpreter hosting the collaborators (default: python3)
    pub python: String,
    /// Module the collaborator functions are looked up in (default: spacy.cli)
    pub module: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.into(),
            module: DEFAULT_MODULE.into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub python: Option<String>,
    pub module: Option<String>,
}

/// Get the XDG config directory.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "spacy").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("spacy.toml"))
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

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            python: overlay.python.clone().unwrap_or_else(|| self.python.clone()),
            module: overlay.module.clone().unwrap_or_else(|| self.module.clone()),
        }
    }

    /// Expand `~`, `$VAR` and `${VAR}` in the interpreter path.
    ///
    /// Unknown variables leave the value unchanged.
    fn expand_paths(&mut self) {
        if let Ok(expanded) = shellexpand::full(&self.python) {
            self.python = expanded.into_owned();
        }
    }

    /// Load settings: defaults, global config, environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(None)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional file applied after the global config
    ///
    /// # Errors
    /// [`ApplicationError::Config`] if a config file is unreadable or malformed.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply SPACY_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SPACY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("python") {
            settings.python = val;
        }
        if let Ok(val) = config.get_string("module") {
            settings.module = val;
        }
        Ok(settings)
    }
}
