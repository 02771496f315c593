//! Report DTOs returned by [`super::NestService`] for display.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{ClassName, ComponentKind};

/// Summary of one scaffolding run (or dry run).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub html: PathBuf,
    pub root_stylesheet: PathBuf,
    pub dry_run: bool,
    /// Distinct classes found in the document.
    pub total_classes: usize,
    /// Classes the ledger did not know before this run.
    pub new_classes: Vec<ClassName>,
    /// New classes that match no BEM kind and were skipped.
    pub unrecognized: Vec<ClassName>,
    pub created_directories: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    pub kept_files: Vec<PathBuf>,
    pub appended_imports: Vec<String>,
}

impl RunReport {
    /// Whether the run had nothing to create.
    pub fn is_noop(&self) -> bool {
        self.created_directories.is_empty()
            && self.created_files.is_empty()
            && self.appended_imports.is_empty()
    }
}

/// One class of a document and what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassReport {
    pub class_name: ClassName,
    pub kind: Option<ComponentKind>,
    /// Component directory relative to the blocks directory.
    pub directory: Option<PathBuf>,
}
