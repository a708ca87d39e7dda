//! drift-scaffold - Curriculum Scaffolding Generator
//!
//! Generates the documentation tree for the 24-week configuration drift
//! internship project: a README, setup guide, resources index, 24 weekly
//! indexes and 120 daily task files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use drift_scaffold::{ScaffoldPlan, TreeBuilder};
//!
//! let plan = ScaffoldPlan::build("Detect_Drift");
//! let report = TreeBuilder::new(".").write(&plan)?;
//! assert_eq!(report.files_written, plan.file_count());
//! # Ok::<(), drift_scaffold::ScaffoldError>(())
//! ```
//!
//! ## Modules
//!
//! - [`curriculum`]: constant tables and the content resolver
//! - [`render`]: markdown builders for every generated file
//! - [`scaffold`]: in-memory plan and the filesystem tree builder
//! - [`config`]: layered configuration
//! - [`cli`]: command handlers

pub mod cli;
pub mod config;
pub mod constants;
pub mod curriculum;
pub mod render;
pub mod scaffold;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use types::{Coordinate, ProjectSlug, Result, ResultExt, ScaffoldError};

pub use scaffold::{GeneratedFile, ScaffoldPlan, TreeBuilder, WriteReport};
