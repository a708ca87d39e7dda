//! Show Command
//!
//! Print a rendered week index or daily task file without writing anything.

use std::io::Write;
use tracing::debug;

use crate::render;
use crate::types::{Coordinate, Result, check_week};

pub fn run(week: u32, day: Option<u32>) -> Result<()> {
    let page = render_page(week, day)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Week README when `day` is absent, otherwise the day file
pub fn render_page(week: u32, day: Option<u32>) -> Result<String> {
    match day {
        Some(day) => {
            let coord = Coordinate::checked(week, day)?;
            debug!("Rendering {}", coord);
            Ok(render::day::render(coord))
        }
        None => {
            debug!("Rendering week {} index", week);
            Ok(render::week::render(check_week(week)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScaffoldError;

    #[test]
    fn test_week_page() {
        let page = render_page(4, None).unwrap();
        assert!(page.starts_with("# Week 4: Building the Core Drift Detection Engine\n"));
    }

    #[test]
    fn test_day_page() {
        let page = render_page(2, Some(4)).unwrap();
        assert!(page.starts_with("# Week 2 Day 4: Implementing Resource Comparison Algorithms\n"));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(render_page(25, None), Err(ScaffoldError::OutOfRange(_))));
        assert!(matches!(render_page(1, Some(6)), Err(ScaffoldError::OutOfRange(_))));
    }
}
