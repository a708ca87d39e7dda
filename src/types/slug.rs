//! Project slug
//!
//! Directory-safe form of the project title.

use serde::Serialize;
use std::fmt;

/// Normalized project title used as the base directory name
///
/// Lowercased, with spaces and underscores replaced by hyphens. No other
/// characters are touched and no validation is performed, so an empty title
/// yields an empty slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectSlug(String);

impl ProjectSlug {
    pub fn new(title: &str) -> Self {
        Self(title.to_lowercase().replace([' ', '_'], "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<std::path::Path> for ProjectSlug {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}
