//! Config Command
//!
//! Manage drift-scaffold configuration.
//!
//! Usage:
//!   drift-scaffold config show [-f json]
//!   drift-scaffold config path
//!   drift-scaffold config init [-g] [--force]

use std::path::Path;

use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::types::{Result, ResultExt};

/// Show the merged effective configuration
pub fn show(explicit: Option<&Path>, format: &str) -> Result<()> {
    let config = ConfigLoader::load(explicit)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!(
            "{}",
            toml::to_string_pretty(&config).with_context("Rendering config as TOML")?
        );
    }
    Ok(())
}

/// Show configuration file paths
pub fn path() -> Result<()> {
    let output = Output::new();
    output.section("Configuration paths");

    match ConfigLoader::global_config_path() {
        Some(global) => output.path_entry("Global:", &global),
        None => println!("  Global:  (not available)"),
    }
    output.path_entry("Project:", &ConfigLoader::project_config_path());
    Ok(())
}

/// Write a default config file
pub fn init(global: bool, force: bool) -> Result<()> {
    let (path, created) = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project(force)?
    };

    let output = Output::new();
    if created {
        output.success(&format!("Initialized configuration: {}", path.display()));
    } else {
        output.warning(&format!(
            "Config already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
