//! Content Resolver
//!
//! Maps a week or a (week, day) coordinate to curriculum text. Every lookup
//! is exact-match against the constant tables with a generic fallback, so
//! any coordinate (in range or not) resolves to some text.

use std::borrow::Cow;

use super::tables::{self, lookup};
use crate::constants::curriculum::DAYS_PER_WEEK;
use crate::types::Coordinate;

/// Theme of a week
pub fn theme(week: u32) -> Cow<'static, str> {
    week.checked_sub(1)
        .and_then(|idx| tables::WEEK_THEMES.get(idx as usize))
        .map(|theme| Cow::Borrowed(*theme))
        .unwrap_or_else(|| Cow::Owned(format!("Week {} Development", week)))
}

/// Weekly objectives
pub fn objectives(week: u32) -> &'static [&'static str] {
    tables::WEEK_OBJECTIVES
        .iter()
        .find(|(w, _)| *w == week)
        .map(|(_, list)| list.as_slice())
        .unwrap_or(tables::GENERIC_WEEK_OBJECTIVES)
}

pub fn day_title(coord: Coordinate) -> Cow<'static, str> {
    match lookup(tables::DAY_TITLES, coord) {
        Some(title) => Cow::Borrowed(*title),
        None => Cow::Owned(format!(
            "Detect_Drift Implementation - Week {}, Day {}",
            coord.week, coord.day
        )),
    }
}

pub fn why_this_matters(coord: Coordinate) -> &'static str {
    lookup(tables::WHY_THIS_MATTERS, coord)
        .copied()
        .unwrap_or(tables::GENERIC_WHY_THIS_MATTERS)
}

pub fn connection_to_project(coord: Coordinate) -> &'static str {
    lookup(tables::CONNECTION_TO_PROJECT, coord)
        .copied()
        .unwrap_or(tables::GENERIC_CONNECTION_TO_PROJECT)
}

pub fn learning_objectives(coord: Coordinate) -> &'static [&'static str] {
    lookup(tables::LEARNING_OBJECTIVES, coord)
        .map(|list| list.as_slice())
        .unwrap_or(tables::GENERIC_LEARNING_OBJECTIVES)
}

pub fn prerequisites(coord: Coordinate) -> &'static [&'static str] {
    lookup(tables::PREREQUISITES, coord)
        .map(|list| list.as_slice())
        .unwrap_or(tables::GENERIC_PREREQUISITES)
}

// =============================================================================
// Bundled content
// =============================================================================

/// Everything a daily task file needs from the tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContent {
    pub coord: Coordinate,
    pub title: Cow<'static, str>,
    pub why_this_matters: &'static str,
    pub connection_to_project: &'static str,
    pub learning_objectives: &'static [&'static str],
    pub prerequisites: &'static [&'static str],
}

/// Everything a weekly index needs from the tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekContent {
    pub week: u32,
    pub theme: Cow<'static, str>,
    pub objectives: &'static [&'static str],
    /// `(day, title)` for each day of the week
    pub days: Vec<(u32, Cow<'static, str>)>,
}

pub fn resolve_day(coord: Coordinate) -> DayContent {
    DayContent {
        coord,
        title: day_title(coord),
        why_this_matters: why_this_matters(coord),
        connection_to_project: connection_to_project(coord),
        learning_objectives: learning_objectives(coord),
        prerequisites: prerequisites(coord),
    }
}

pub fn resolve_week(week: u32) -> WeekContent {
    WeekContent {
        week,
        theme: theme(week),
        objectives: objectives(week),
        days: (1..=DAYS_PER_WEEK)
            .map(|day| (day, day_title(Coordinate::new(week, day))))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_theme_explicit() {
        assert_eq!(theme(1), "Foundation and GitOps Fundamentals");
        assert_eq!(theme(24), "Demonstration and Presentation");
    }

    #[test]
    fn test_theme_fallback() {
        assert_eq!(theme(25), "Week 25 Development");
        assert_eq!(theme(0), "Week 0 Development");
    }

    #[test]
    fn test_objectives_explicit_weeks() {
        assert_eq!(
            objectives(1)[0],
            "Understand GitOps principles and configuration drift concepts"
        );
        assert_eq!(objectives(2)[1], "Master Git workflow for the project");
    }

    #[test]
    fn test_objectives_fallback_identical() {
        assert_eq!(objectives(3), objectives(24));
        assert_eq!(objectives(3).len(), 5);
        assert_eq!(objectives(3)[0], "Continue developing the Detect_Drift project");
    }

    #[test]
    fn test_day_one_overrides() {
        let coord = Coordinate::new(1, 1);
        assert_eq!(
            day_title(coord),
            "Introduction to GitOps and Configuration Drift"
        );
        let objectives = learning_objectives(coord);
        assert_eq!(objectives.len(), 5);
        assert!(
            objectives[0].starts_with("Explain the concept of configuration drift")
        );
        assert!(why_this_matters(coord).starts_with("Configuration drift is one"));
        assert!(connection_to_project(coord).starts_with("Today establishes"));
        assert_eq!(prerequisites(coord)[2], "Familiarity with YAML syntax");
    }

    #[test]
    fn test_no_inheritance_within_week() {
        let coord = Coordinate::new(1, 2);
        assert_eq!(day_title(coord), "Setting Up Your Development Environment");
        assert_eq!(why_this_matters(coord), tables::GENERIC_WHY_THIS_MATTERS);
        assert_eq!(
            learning_objectives(coord),
            tables::GENERIC_LEARNING_OBJECTIVES
        );
        assert_eq!(prerequisites(coord), tables::GENERIC_PREREQUISITES);
    }

    #[test]
    fn test_generic_day_title() {
        assert_eq!(
            day_title(Coordinate::new(3, 4)),
            "Detect_Drift Implementation - Week 3, Day 4"
        );
    }

    #[test]
    fn test_resolve_week_lists_five_days() {
        let week = resolve_week(2);
        assert_eq!(week.theme, "Development Environment and Basic Tools");
        assert_eq!(week.days.len(), 5);
        assert_eq!(week.days[4].0, 5);
        assert_eq!(
            week.days[4].1,
            "Testing Drift Detection with Various Resources"
        );
    }

    proptest! {
        #[test]
        fn prop_every_week_has_theme(week in 1u32..=24) {
            prop_assert!(!theme(week).is_empty());
            prop_assert_eq!(objectives(week).len(), 5);
        }

        #[test]
        fn prop_generic_fallback_identical(week in 3u32..=200, day in 0u32..=50) {
            let coord = Coordinate::new(week, day);
            prop_assert_eq!(why_this_matters(coord), tables::GENERIC_WHY_THIS_MATTERS);
            prop_assert_eq!(connection_to_project(coord), tables::GENERIC_CONNECTION_TO_PROJECT);
            prop_assert_eq!(learning_objectives(coord), tables::GENERIC_LEARNING_OBJECTIVES);
            prop_assert_eq!(prerequisites(coord), tables::GENERIC_PREREQUISITES);
            prop_assert_eq!(
                day_title(coord).into_owned(),
                format!("Detect_Drift Implementation - Week {}, Day {}", week, day)
            );
        }

        #[test]
        fn prop_resolution_is_deterministic(week in 0u32..=30, day in 0u32..=7) {
            let coord = Coordinate::new(week, day);
            prop_assert_eq!(resolve_day(coord), resolve_day(coord));
        }
    }
}
