//! Global Constants
//!
//! Curriculum bounds and the fixed names of the generated tree.
//! Loop bounds used by the planner live here so the summary count and the
//! tree always agree.

/// Curriculum shape
pub mod curriculum {
    /// Number of weeks in the internship
    pub const WEEKS: u32 = 24;

    /// Working days per week
    pub const DAYS_PER_WEEK: u32 = 5;

    /// Total number of daily task files
    pub const DAY_FILES: usize = (WEEKS * DAYS_PER_WEEK) as usize;

    /// Total number of weekly index files
    pub const WEEK_FILES: usize = WEEKS as usize;
}

/// Project defaults
pub mod project {
    /// Title used when neither the command line nor config supplies one
    pub const DEFAULT_TITLE: &str = "Detect_Drift";
}

/// Names of directories and files in the generated tree
pub mod layout {
    pub const README: &str = "README.md";

    pub const SETUP_DIR: &str = "setup";
    pub const SETUP_SCRIPT: &str = "setup.sh";

    pub const RESOURCES_DIR: &str = "resources";

    /// Empty leaves created under `resources/`
    pub const RESOURCE_LEAVES: [&str; 3] = ["sample_configs", "cheat_sheets", "case_studies"];

    pub const WEEKLY_TASKS_DIR: &str = "weekly_tasks";

    /// Unix mode applied to executable scripts
    pub const EXECUTABLE_MODE: u32 = 0o755;

    /// Top-level support files: README, setup README, setup script, resources README
    pub const SUPPORT_FILES: usize = 4;

    /// Directory name for a week, e.g. `week-3`
    pub fn week_dir(week: u32) -> String {
        format!("week-{}", week)
    }

    /// File name for a day, e.g. `day-2.md`
    pub fn day_file(day: u32) -> String {
        format!("day-{}.md", day)
    }
}

/// Configuration file locations
pub mod config {
    /// Application directory under the user config home
    pub const APP_DIR: &str = "drift-scaffold";

    /// Config file name inside `APP_DIR`
    pub const GLOBAL_FILE: &str = "config.toml";

    /// Project-local config file in the current directory
    pub const PROJECT_FILE: &str = ".drift-scaffold.toml";

    /// Environment variable prefix (`DRIFT_SCAFFOLD_PROJECT__TITLE` -> `project.title`)
    pub const ENV_PREFIX: &str = "DRIFT_SCAFFOLD_";
}
