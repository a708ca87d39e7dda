//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/drift-scaffold/config.toml)
//! 3. Project config (./.drift-scaffold.toml)
//! 4. Environment variables (DRIFT_SCAFFOLD_*)
//! 5. `--config` file, then CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
