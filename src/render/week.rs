//! Weekly index

use crate::constants::layout::day_file;
use crate::curriculum::{WeekContent, resolve_week};

/// Render `weekly_tasks/week-<n>/README.md`
pub fn render(week: u32) -> String {
    render_content(&resolve_week(week))
}

pub fn render_content(content: &WeekContent) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Week {}: {}\n\n", content.week, content.theme));

    output.push_str("## Weekly Objectives\n\n");
    for objective in content.objectives {
        output.push_str(&format!("- {}\n", objective));
    }

    output.push_str("\n## Daily Tasks\n\n");
    for (day, title) in &content.days {
        output.push_str(&format!("- [Day {}: {}]({})\n", day, title, day_file(*day)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_reference() {
        assert_eq!(render(1), include_str!("testdata/week-1-README.md"));
        assert_eq!(render(12), include_str!("testdata/week-12-README.md"));
    }

    #[test]
    fn test_week_one() {
        let output = render(1);
        assert!(output.starts_with("# Week 1: Foundation and GitOps Fundamentals\n\n## Weekly Objectives\n\n- Understand GitOps principles"));
        assert!(output.contains(
            "\n## Daily Tasks\n\n- [Day 1: Introduction to GitOps and Configuration Drift](day-1.md)\n"
        ));
        assert!(output.ends_with("- [Day 5: Building Your First Drift Detector](day-5.md)\n"));
    }

    #[test]
    fn test_generic_week() {
        let output = render(7);
        assert!(output.starts_with("# Week 7: Notification and Alerting\n"));
        assert!(output.contains("- Continue developing the Detect_Drift project\n"));
        assert!(output.contains(
            "- [Day 3: Detect_Drift Implementation - Week 7, Day 3](day-3.md)\n"
        ));
        assert_eq!(output.matches("](day-").count(), 5);
    }
}
