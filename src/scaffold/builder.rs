//! Tree Builder
//!
//! Materializes a `ScaffoldPlan` under an output root. Directory creation is
//! idempotent and files are overwritten unconditionally. The first
//! filesystem error aborts the run; files already written stay on disk.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::plan::{GeneratedFile, ScaffoldPlan};
use crate::types::{Result, ScaffoldError};

/// Outcome of a completed write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    /// Base directory of the tree (output root joined with the slug)
    pub base_dir: PathBuf,
    pub directories: usize,
    pub files_written: usize,
    pub bytes_written: u64,
}

pub struct TreeBuilder {
    root: PathBuf,
    executable_scripts: bool,
}

impl TreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            executable_scripts: true,
        }
    }

    /// Whether scripts get the executable bit (unix only)
    pub fn with_executable_scripts(mut self, enabled: bool) -> Self {
        self.executable_scripts = enabled;
        self
    }

    pub fn write(&self, plan: &ScaffoldPlan) -> Result<WriteReport> {
        for dir in &plan.directories {
            let path = self.root.join(dir);
            debug!("Creating directory {}", path.display());
            fs::create_dir_all(&path)
                .map_err(|e| ScaffoldError::write("create directory", &path, e))?;
        }

        let mut bytes_written = 0u64;
        for file in &plan.files {
            self.write_file(file)?;
            bytes_written += file.contents.len() as u64;
        }

        let report = WriteReport {
            base_dir: self.root.join(plan.base_dir()),
            directories: plan.directories.len(),
            files_written: plan.files.len(),
            bytes_written,
        };

        info!(
            "Wrote {} files ({} bytes) under {}",
            report.files_written,
            report.bytes_written,
            report.base_dir.display()
        );

        Ok(report)
    }

    fn write_file(&self, file: &GeneratedFile) -> Result<()> {
        let path = self.root.join(&file.path);
        debug!("Writing {}", path.display());

        fs::write(&path, &file.contents).map_err(|e| ScaffoldError::write("write", &path, e))?;

        if file.executable && self.executable_scripts {
            set_executable(&path)?;
        }

        Ok(())
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use crate::constants::layout::EXECUTABLE_MODE;
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|e| ScaffoldError::write("set permissions on", path, e))
}

#[cfg(not(unix))]
fn set_executable(path: &Path) -> Result<()> {
    debug!("Skipping executable bit on {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn count_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let path = entry.unwrap().path();
                if path.is_dir() { count_files(&path) } else { 1 }
            })
            .sum()
    }

    #[test]
    fn test_write_fresh_tree() {
        let temp_dir = TempDir::new().unwrap();
        let plan = ScaffoldPlan::build("Detect_Drift");

        let report = TreeBuilder::new(temp_dir.path()).write(&plan).unwrap();

        let base = temp_dir.path().join("detect-drift");
        assert_eq!(report.base_dir, base);
        assert_eq!(report.files_written, 148);
        assert_eq!(count_files(&base), 148);

        let weekly = base.join("weekly_tasks");
        let weeks: Vec<_> = fs::read_dir(&weekly).unwrap().collect();
        assert_eq!(weeks.len(), 24);
        for week in 1..=24 {
            assert_eq!(count_files(&weekly.join(format!("week-{}", week))), 6);
        }

        for leaf in ["sample_configs", "cheat_sheets", "case_studies"] {
            let dir = base.join("resources").join(leaf);
            assert!(dir.is_dir());
            assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        }
    }

    #[test]
    fn test_contents_match_plan() {
        let temp_dir = TempDir::new().unwrap();
        let plan = ScaffoldPlan::build("Detect_Drift");
        TreeBuilder::new(temp_dir.path()).write(&plan).unwrap();

        let day = fs::read_to_string(
            temp_dir
                .path()
                .join("detect-drift/weekly_tasks/week-1/day-1.md"),
        )
        .unwrap();
        assert!(day.starts_with("# Week 1 Day 1: Introduction to GitOps and Configuration Drift\n"));
    }

    #[test]
    fn test_rerun_overwrites_identically() {
        let temp_dir = TempDir::new().unwrap();
        let plan = ScaffoldPlan::build("Detect_Drift");
        let builder = TreeBuilder::new(temp_dir.path());
        builder.write(&plan).unwrap();

        let readme = temp_dir.path().join("detect-drift/weekly_tasks/week-9/README.md");
        fs::write(&readme, "stale").unwrap();

        let report = builder.write(&plan).unwrap();
        assert_eq!(report.files_written, 148);

        for file in &plan.files {
            let on_disk = fs::read_to_string(temp_dir.path().join(&file.path)).unwrap();
            assert_eq!(on_disk, file.contents, "{}", file.path.display());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_setup_script_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let plan = ScaffoldPlan::build("Detect_Drift");
        TreeBuilder::new(temp_dir.path()).write(&plan).unwrap();

        let script = temp_dir.path().join("detect-drift/setup/setup.sh");
        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_error_carries_path() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the base directory should go
        fs::write(temp_dir.path().join("detect-drift"), "blocker").unwrap();

        let plan = ScaffoldPlan::build("Detect_Drift");
        let err = TreeBuilder::new(temp_dir.path()).write(&plan).unwrap_err();

        assert_eq!(err.path(), Some(temp_dir.path().join("detect-drift").as_path()));
    }
}
