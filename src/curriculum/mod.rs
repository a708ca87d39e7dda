//! Curriculum Content
//!
//! Static reference data for the 24-week internship and the resolver that
//! turns a week or day coordinate into text.

pub mod resolver;
pub mod tables;

pub use resolver::{
    DayContent, WeekContent, connection_to_project, day_title, learning_objectives, objectives,
    prerequisites, resolve_day, resolve_week, theme, why_this_matters,
};
