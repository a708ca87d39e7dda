//! Daily task file
//!
//! The resolver-driven head (title, overview, objectives, prerequisites)
//! followed by the fixed placeholder sections shared by every day.

use crate::curriculum::{DayContent, resolve_day};
use crate::types::Coordinate;

/// Fixed sections from "Morning Session" through "Success Criteria"
const DAY_SECTIONS: &str = include_str!("templates/day_sections.md");

/// Render `weekly_tasks/week-<n>/day-<d>.md`
pub fn render(coord: Coordinate) -> String {
    render_content(&resolve_day(coord))
}

pub fn render_content(content: &DayContent) -> String {
    let mut output = String::with_capacity(DAY_SECTIONS.len() + 1024);

    output.push_str(&format!(
        "# Week {} Day {}: {}\n\n",
        content.coord.week, content.coord.day, content.title
    ));

    output.push_str("## Overview\n\n");
    output.push_str("- **Duration**: Full day (8 hours)\n");
    output.push_str(&format!(
        "- **Why This Matters**: {}\n",
        content.why_this_matters
    ));
    output.push_str(&format!(
        "- **Connection to Project**: {}\n\n",
        content.connection_to_project
    ));

    output.push_str("## Learning Objectives\n\n");
    output.push_str("By the end of today, you will be able to:\n");
    push_list(&mut output, content.learning_objectives);

    output.push_str("\n## Prerequisites\n\n");
    push_list(&mut output, content.prerequisites);

    output.push('\n');
    output.push_str(DAY_SECTIONS);

    output
}

fn push_list(output: &mut String, items: &[&str]) {
    for item in items {
        output.push_str("- ");
        output.push_str(item);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_day_matches_reference() {
        assert_eq!(
            render(Coordinate::new(1, 1)),
            include_str!("testdata/week-1-day-1.md")
        );
    }

    #[test]
    fn test_generic_day_matches_reference() {
        assert_eq!(
            render(Coordinate::new(3, 2)),
            include_str!("testdata/week-3-day-2.md")
        );
    }

    #[test]
    fn test_generic_days_differ_only_in_heading() {
        let a = render(Coordinate::new(5, 1));
        let b = render(Coordinate::new(20, 4));
        let strip = |s: &str| s.split_once('\n').map(|(_, rest)| rest.to_string());
        assert_eq!(strip(&a), strip(&b));
        assert!(b.starts_with("# Week 20 Day 4: Detect_Drift Implementation - Week 20, Day 4\n"));
    }

    #[test]
    fn test_section_order() {
        let output = render(Coordinate::new(2, 3));
        let headings = [
            "## Overview",
            "## Learning Objectives",
            "## Prerequisites",
            "## Morning Session (4 hours)",
            "## Afternoon Session (4 hours)",
            "## Resources",
            "## Troubleshooting Guide",
            "## Mentorship and Support",
            "## Extension Activities",
            "## Preparation for Tomorrow",
            "## Success Criteria",
        ];
        let positions: Vec<_> = headings
            .iter()
            .map(|h| output.find(h).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.iter().all(|p| *p != usize::MAX));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
