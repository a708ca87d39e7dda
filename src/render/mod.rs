//! Markdown Rendering
//!
//! Pure string builders for every file in the generated tree. Rendering has
//! no side effects, so the same title always yields byte-identical output.

pub mod day;
pub mod support;
pub mod week;
