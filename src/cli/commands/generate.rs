//! Generate Command
//!
//! Build the curriculum tree for a project title.
//!
//! Usage:
//!   drift-scaffold generate [TITLE] [--output DIR] [--dry-run] [-f json]

use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::Output;
use crate::config::{Config, ConfigLoader};
use crate::constants::curriculum::{DAY_FILES, WEEK_FILES};
use crate::scaffold::{ScaffoldPlan, TreeBuilder, WriteReport};
use crate::types::Result;

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Project title; falls back to `project.title` from config
    pub title: Option<String>,
    /// Output root; falls back to `output.root` from config
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
    /// Explicit `--config` file
    pub config: Option<PathBuf>,
}

/// What a generate run produced
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Dry run: the plan was built but nothing was written
    Planned(ScaffoldPlan),
    Written {
        plan: ScaffoldPlan,
        report: WriteReport,
    },
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let config = ConfigLoader::load(options.config.as_deref())?;
    let json = options.json;

    match execute(options, &config)? {
        GenerateOutcome::Planned(plan) => print_plan(&plan, json),
        GenerateOutcome::Written { plan, report } => print_report(&plan, &report, json),
    }
}

/// Resolve title and root against config, then plan and (unless dry run) write
pub fn execute(options: GenerateOptions, config: &Config) -> Result<GenerateOutcome> {
    let title = options
        .title
        .unwrap_or_else(|| config.project.title.clone());
    let root = options
        .output
        .unwrap_or_else(|| config.output.root.clone());

    info!("Generating '{}' under {}", title, root.display());
    let plan = ScaffoldPlan::build(&title);
    debug!(
        "Planned {} directories and {} files",
        plan.directories.len(),
        plan.file_count()
    );

    if options.dry_run {
        return Ok(GenerateOutcome::Planned(plan));
    }

    let report = TreeBuilder::new(root)
        .with_executable_scripts(config.output.executable_scripts)
        .write(&plan)?;

    Ok(GenerateOutcome::Written { plan, report })
}

fn print_plan(plan: &ScaffoldPlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    for dir in &plan.directories {
        println!("{}/", dir.display());
    }
    for file in &plan.files {
        if file.executable {
            println!("{} (executable)", file.path.display());
        } else {
            println!("{}", file.path.display());
        }
    }

    Output::new().info(&format!(
        "Dry run: {} directories, {} files would be written",
        plan.directories.len(),
        plan.file_count()
    ));
    Ok(())
}

fn print_report(plan: &ScaffoldPlan, report: &WriteReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let output = Output::new();
    output.success(&format!(
        "Project structure created successfully in the '{}' directory",
        plan.slug
    ));
    output.info(&format!("Total files created: {}", summary(report)));
    Ok(())
}

/// File count breakdown, derived from what was actually written
pub fn summary(report: &WriteReport) -> String {
    let support = report.files_written.saturating_sub(DAY_FILES + WEEK_FILES);
    format!(
        "{} ({} daily tasks, {} weekly READMEs, and {} support files)",
        report.files_written, DAY_FILES, WEEK_FILES, support
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let options = GenerateOptions {
            output: Some(temp_dir.path().to_path_buf()),
            dry_run: true,
            ..Default::default()
        };

        let outcome = execute(options, &Config::default()).unwrap();
        assert!(matches!(outcome, GenerateOutcome::Planned(ref p) if p.file_count() == 148));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_title_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.project.title = "Drift Lab".to_string();
        config.output.root = temp_dir.path().to_path_buf();

        let outcome = execute(GenerateOptions::default(), &config).unwrap();
        let GenerateOutcome::Written { plan, report } = outcome else {
            panic!("expected a write");
        };
        assert_eq!(plan.slug.as_str(), "drift-lab");
        assert_eq!(report.base_dir, temp_dir.path().join("drift-lab"));
        assert!(temp_dir.path().join("drift-lab/README.md").exists());
    }

    #[test]
    fn test_cli_title_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let options = GenerateOptions {
            title: Some("Detect_Drift".to_string()),
            output: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let mut config = Config::default();
        config.project.title = "Ignored".to_string();

        execute(options, &config).unwrap();
        assert!(temp_dir.path().join("detect-drift").is_dir());
        assert!(!temp_dir.path().join("ignored").exists());
    }

    #[test]
    fn test_summary_counts_every_file() {
        let report = WriteReport {
            base_dir: PathBuf::from("detect-drift"),
            directories: 31,
            files_written: 148,
            bytes_written: 0,
        };
        assert_eq!(
            summary(&report),
            "148 (120 daily tasks, 24 weekly READMEs, and 4 support files)"
        );
    }
}
