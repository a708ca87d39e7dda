//! Unified Error Type System
//!
//! Centralized error type for the entire application.
//!
//! Only two things can go wrong while scaffolding: the filesystem refuses a
//! write, or configuration cannot be loaded. Neither is retried. The first
//! error aborts the run and already-written files are left in place.

use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ScaffoldError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Filesystem Errors
    // -------------------------------------------------------------------------
    /// Filesystem operation failed on a specific path
    #[error("Failed to {action} {}: {source}", .path.display())]
    Write {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl ScaffoldError {
    /// Wrap an IO error with the path it occurred on
    pub fn write(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Write { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| ScaffoldError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
