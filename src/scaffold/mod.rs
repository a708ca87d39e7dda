//! Scaffold Generation
//!
//! ```text
//! title → ScaffoldPlan::build (pure) → TreeBuilder::write (filesystem)
//! ```

pub mod builder;
pub mod plan;

pub use builder::{TreeBuilder, WriteReport};
pub use plan::{GeneratedFile, ScaffoldPlan};
