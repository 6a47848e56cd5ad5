//! Configuration loading from files and environment (Immutable functional pattern)
//!
//! This module handles loading configuration from:
//! 1. Built-in defaults
//! 2. Global config: ~/.config/drills/config.toml
//! 3. Project config: .drills/config.toml
//! 4. `DRILLS_CONFIG` environment variable
//!
//! All operations return new instances rather than mutating in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::{Error, Result};

/// Names an extra config file layered above the project config
pub const CONFIG_ENV_VAR: &str = "DRILLS_CONFIG";

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy (immutable functional pattern)
///
/// # Errors
///
/// Returns error if:
/// - A config file is unreadable or malformed TOML
/// - `DRILLS_CONFIG` names a file that does not exist
/// - The merged values fail validation
pub fn load_config() -> Result<Config> {
    load_config_at(&ConfigPaths::discover()?, None)
}

/// Load the full hierarchy, then layer `path` on top of it.
///
/// # Errors
///
/// Same as [`load_config`], plus `path` must exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    load_config_at(&ConfigPaths::discover()?, Some(path))
}

/// Load the hierarchy from explicit file locations, with an optional
/// `explicit` file layered last.
///
/// # Errors
///
/// Same as [`load_config_from`].
pub fn load_config_at(paths: &ConfigPaths, explicit: Option<&Path>) -> Result<Config> {
    let config = load_layers(paths)?;
    let config = match explicit {
        Some(path) => config.merge(load_toml_file(path)?),
        None => config,
    };
    config.validate()?;
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Locations of the optional global and project config files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub global: Option<PathBuf>,
    pub project: PathBuf,
}

impl ConfigPaths {
    /// The user's config dir and `.drills/config.toml` under the current dir
    ///
    /// # Errors
    ///
    /// Returns error if current directory cannot be determined
    pub fn discover() -> Result<Self> {
        Ok(Self {
            global: global_config_path(),
            project: project_config_path()?,
        })
    }
}

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "drills")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Get path to project config file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
pub fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(".drills/config.toml"))
        .map_err(|e| Error::io_error(format!("Failed to get current directory: {e}")))
}

/// Load a TOML file into a partial Config
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - Path is a directory instead of a file
/// - TOML is malformed
pub fn load_toml_file(path: &Path) -> Result<Config> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYERING
// ═══════════════════════════════════════════════════════════════════════════

fn load_layers(paths: &ConfigPaths) -> Result<Config> {
    // 1. Start with built-in defaults
    let config = Config::default();

    // 2. Global config if it exists
    let config = match &paths.global {
        Some(path) => merge_if_exists(config, path)?,
        None => config,
    };

    // 3. Project config if it exists
    let config = merge_if_exists(config, &paths.project)?;

    // 4. Env-named file must exist when set
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.is_empty() => {
            debug!(path = %value, env = CONFIG_ENV_VAR, "loading config from environment");
            let layer = load_toml_file(Path::new(&value))?;
            Ok(config.merge(layer))
        }
        _ => Ok(config),
    }
}

fn merge_if_exists(config: Config, path: &Path) -> Result<Config> {
    if path.exists() {
        debug!(path = %path.display(), "loading config layer");
        load_toml_file(path).map(|layer| config.merge(layer))
    } else {
        Ok(config)
    }
}
