//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/drift-scaffold/config.toml)
//! 3. Project config (./.drift-scaffold.toml)
//! 4. Environment variables (DRIFT_SCAFFOLD_* prefix, `__` nests)
//! 5. Explicit `--config` file

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::config::{APP_DIR, ENV_PREFIX, GLOBAL_FILE, PROJECT_FILE};
use crate::types::{Result, ScaffoldError};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → global → project → env vars → explicit file
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ScaffoldError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let mut files = Vec::new();
        if let Some(global_path) = Self::global_config_path() {
            files.push(global_path);
        }
        files.push(Self::project_config_path());

        Self::extract(Self::figment(&files, explicit))
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file(path)),
        )
    }

    /// Defaults, then each existing file in order, then env, then the explicit file
    fn figment(files: &[PathBuf], explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in files.iter().filter(|p| p.exists()) {
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // DRIFT_SCAFFOLD_PROJECT__TITLE -> project.title
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = explicit {
            debug!("Loading explicit config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| ScaffoldError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/drift-scaffold/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(GLOBAL_FILE))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_FILE)
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the default config template to `path`
    ///
    /// Returns `false` if the file exists and `force` is not set.
    pub fn init_at(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::write("create directory", parent, e))?;
        }

        fs::write(path, Self::default_config())
            .map_err(|e| ScaffoldError::write("write", path, e))?;
        info!("Created config: {}", path.display());

        Ok(true)
    }

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<(PathBuf, bool)> {
        let path = Self::global_config_path().ok_or_else(|| {
            ScaffoldError::Config("Cannot determine global config directory".to_string())
        })?;
        let created = Self::init_at(&path, force)?;
        Ok((path, created))
    }

    /// Initialize project configuration in the current directory
    pub fn init_project(force: bool) -> Result<(PathBuf, bool)> {
        let path = Self::project_config_path();
        let created = Self::init_at(&path, force)?;
        Ok((path, created))
    }

    /// Default config content (TOML)
    fn default_config() -> String {
        r#"# drift-scaffold configuration
# Project settings override the global file; DRIFT_SCAFFOLD_* env vars override both.

version = "1.0"

[project]
# Title used when `generate` is run without one
title = "Detect_Drift"

[output]
# Directory the project tree is created in
root = "."
executable_scripts = true
"#
        .to_string()
    }
}
