//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::project::DEFAULT_TITLE;
use crate::types::{Result, ScaffoldError};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Project settings
    pub project: ProjectConfig,

    /// Output tree settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            project: ProjectConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `ScaffoldError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ScaffoldError::Config(
                "version must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Title used when none is given on the command line
    pub title: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the project tree is created in
    pub root: PathBuf,

    /// Mark generated shell scripts executable
    pub executable_scripts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            executable_scripts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.project.title, "Detect_Drift");
        assert_eq!(config.output.root, PathBuf::from("."));
        assert!(config.output.executable_scripts);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_version() {
        let config = Config {
            version: " ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ScaffoldError::Config(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[project]\ntitle = \"Drift Lab\"\n").unwrap();
        assert_eq!(config.project.title, "Drift Lab");
        assert_eq!(config.output, OutputConfig::default());
    }
}
