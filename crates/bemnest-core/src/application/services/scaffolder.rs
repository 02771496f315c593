//! Scaffolder - materializes a [`NestPlan`] on the filesystem.
//!
//! Only missing entries are created. Existing directories are left as they
//! are and existing stylesheets are never overwritten, so applying the same
//! plan twice is harmless.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{NestPlan, PlanEntry},
    error::NestResult,
};

/// What applying (or previewing) a plan created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldOutcome {
    pub created_directories: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    /// Stylesheets that already existed and were kept untouched.
    pub kept_files: Vec<PathBuf>,
}

/// Applies plans through the [`Filesystem`] port.
pub struct Scaffolder<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Scaffolder<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create every missing directory and stylesheet of `plan`.
    #[instrument(skip_all, fields(entries = plan.entry_count()))]
    pub fn apply(&self, plan: &NestPlan) -> NestResult<ScaffoldOutcome> {
        self.walk(plan, true)
    }

    /// Report what [`Self::apply`] would create, without writing.
    pub fn preview(&self, plan: &NestPlan) -> NestResult<ScaffoldOutcome> {
        self.walk(plan, false)
    }

    fn walk(&self, plan: &NestPlan, write: bool) -> NestResult<ScaffoldOutcome> {
        let mut outcome = ScaffoldOutcome::default();

        for entry in plan.entries() {
            match entry {
                PlanEntry::Directory(dir) => {
                    if self.filesystem.exists(&dir.path) {
                        continue;
                    }
                    if write {
                        self.filesystem.create_dir_all(&dir.path)?;
                        debug!(path = %dir.path.display(), "Created directory");
                    }
                    outcome.created_directories.push(dir.path.clone());
                }
                PlanEntry::File(file) => {
                    if self.filesystem.exists(&file.path) {
                        debug!(path = %file.path.display(), "Stylesheet exists, keeping it");
                        outcome.kept_files.push(file.path.clone());
                        continue;
                    }
                    if write {
                        self.filesystem.write_file(&file.path, &file.content)?;
                        debug!(
                            path = %file.path.display(),
                            kind = %file.kind,
                            "Created stylesheet"
                        );
                    }
                    outcome.created_files.push(file.path.clone());
                }
            }
        }

        Ok(outcome)
    }
}
