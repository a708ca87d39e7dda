//! Scaffold Plan
//!
//! The complete generated tree, built in memory before anything touches the
//! filesystem. Paths are relative to the output root and start with the
//! project slug.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::curriculum::{DAY_FILES, WEEK_FILES};
use crate::constants::layout::{
    README, RESOURCE_LEAVES, RESOURCES_DIR, SETUP_DIR, SETUP_SCRIPT, SUPPORT_FILES,
    WEEKLY_TASKS_DIR, day_file, week_dir,
};
use crate::render;
use crate::types::{Coordinate, ProjectSlug, days, weeks};

/// One file of the generated tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    #[serde(skip)]
    pub contents: String,
    pub executable: bool,
}

impl GeneratedFile {
    fn new(path: PathBuf, contents: String) -> Self {
        Self {
            path,
            contents,
            executable: false,
        }
    }

    fn mark_executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// Every directory and file the generator produces for one title
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub title: String,
    pub slug: ProjectSlug,
    /// Directories in creation order, parents before children
    pub directories: Vec<PathBuf>,
    /// Files in write order
    pub files: Vec<GeneratedFile>,
}

impl ScaffoldPlan {
    pub fn build(title: &str) -> Self {
        let slug = ProjectSlug::new(title);
        let base = PathBuf::from(slug.as_str());

        let mut directories = Vec::with_capacity(6 + WEEK_FILES);
        let mut files = Vec::with_capacity(SUPPORT_FILES + WEEK_FILES + DAY_FILES);

        let setup = base.join(SETUP_DIR);
        let resources = base.join(RESOURCES_DIR);
        directories.push(base.clone());
        directories.push(setup.clone());
        directories.push(resources.clone());

        files.push(GeneratedFile::new(base.join(README), render::support::readme(title)));
        files.push(GeneratedFile::new(
            setup.join(README),
            render::support::setup_readme(),
        ));
        files.push(
            GeneratedFile::new(setup.join(SETUP_SCRIPT), render::support::setup_script())
                .mark_executable(),
        );
        files.push(GeneratedFile::new(
            resources.join(README),
            render::support::resources_readme(),
        ));

        directories.extend(RESOURCE_LEAVES.iter().map(|leaf| resources.join(leaf)));

        let weekly = base.join(WEEKLY_TASKS_DIR);
        directories.push(weekly.clone());

        for week in weeks() {
            let dir = weekly.join(week_dir(week));
            files.push(GeneratedFile::new(dir.join(README), render::week::render(week)));
            for day in days() {
                files.push(GeneratedFile::new(
                    dir.join(day_file(day)),
                    render::day::render(Coordinate::new(week, day)),
                ));
            }
            directories.push(dir);
        }

        Self {
            title: title.to_string(),
            slug,
            directories,
            files,
        }
    }

    /// Base directory of the tree, relative to the output root
    pub fn base_dir(&self) -> &Path {
        self.slug.as_ref()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn find(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }
}
