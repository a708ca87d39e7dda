//! Curriculum coordinates
//!
//! A `Coordinate` names one daily task file. Lookups accept any value;
//! only `checked` enforces the curriculum bounds.

use serde::Serialize;
use std::fmt;

use super::error::{Result, ScaffoldError};
use crate::constants::curriculum::{DAYS_PER_WEEK, WEEKS};

/// (week, day) pair identifying one daily task file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub week: u32,
    pub day: u32,
}

impl Coordinate {
    pub const fn new(week: u32, day: u32) -> Self {
        Self { week, day }
    }

    /// Build a coordinate, rejecting values outside the curriculum
    pub fn checked(week: u32, day: u32) -> Result<Self> {
        check_week(week)?;
        if !(1..=DAYS_PER_WEEK).contains(&day) {
            return Err(ScaffoldError::OutOfRange(format!(
                "day {} (expected 1..={})",
                day, DAYS_PER_WEEK
            )));
        }
        Ok(Self { week, day })
    }

    /// Every coordinate of the curriculum in week-major order
    pub fn all() -> impl Iterator<Item = Coordinate> {
        weeks().flat_map(|week| days().map(move |day| Coordinate { week, day }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {}, day {}", self.week, self.day)
    }
}

/// Reject a week outside the curriculum
pub fn check_week(week: u32) -> Result<u32> {
    if (1..=WEEKS).contains(&week) {
        Ok(week)
    } else {
        Err(ScaffoldError::OutOfRange(format!(
            "week {} (expected 1..={})",
            week, WEEKS
        )))
    }
}

/// Week numbers, 1-based
pub fn weeks() -> std::ops::RangeInclusive<u32> {
    1..=WEEKS
}

/// Day numbers within a week, 1-based
pub fn days() -> std::ops::RangeInclusive<u32> {
    1..=DAYS_PER_WEEK
}
