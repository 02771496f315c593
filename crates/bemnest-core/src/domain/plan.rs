use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use crate::domain::{
    error::DomainError,
    grammar::{kind_of, partition},
    layout::{ImportDirective, ProjectLayout},
    segments::decompose,
    value_objects::{ClassName, ComponentKind},
};

/// Everything a run would create for a set of new classes.
///
/// This is the output of planning. It holds no I/O, only data; the
/// scaffolder decides at apply time which entries are already on disk.
#[derive(Debug, Clone, Default)]
pub struct NestPlan {
    pub(crate) entries: Vec<PlanEntry>,
    pub(crate) imports: Vec<ImportDirective>,
    pub(crate) unrecognized: Vec<ClassName>,
}

impl NestPlan {
    /// Plan directories, stylesheets and imports for `new_classes`.
    ///
    /// Kinds are visited in [`ComponentKind::ALL`] order and classes in
    /// sorted order, so the same input always yields the same plan.
    pub fn build(
        layout: &ProjectLayout,
        new_classes: &BTreeSet<ClassName>,
    ) -> Result<Self, DomainError> {
        let mut plan = Self::default();
        let mut seen_dirs = HashSet::new();

        for kind in ComponentKind::ALL {
            for class_name in partition(new_classes, kind) {
                let segments = decompose(&class_name, kind)?;

                for level in layout.directory_levels(&segments) {
                    if seen_dirs.insert(level.clone()) {
                        plan.add_directory(level);
                    }
                }

                plan.add_stylesheet(
                    layout.component_stylesheet(&segments, &class_name),
                    kind,
                    class_name.clone(),
                );

                if kind.is_importable() {
                    plan.imports.push(layout.import_directive(&class_name));
                }
            }
        }

        plan.unrecognized = new_classes
            .iter()
            .filter(|name| kind_of(name.as_str()).is_none())
            .cloned()
            .collect();

        plan.validate(layout)?;
        Ok(plan)
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn add_stylesheet(
        &mut self,
        path: impl Into<PathBuf>,
        kind: ComponentKind,
        class_name: ClassName,
    ) {
        self.entries.push(PlanEntry::File(FileToWrite {
            path: path.into(),
            content: rule_block(&class_name),
            kind,
            class_name,
        }));
    }

    /// No path twice, nothing outside the project root.
    pub fn validate(&self, layout: &ProjectLayout) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            if !path.starts_with(layout.root()) {
                return Err(DomainError::PathOutsideRoot {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Directives for new blocks, in sorted block order.
    pub fn imports(&self) -> &[ImportDirective] {
        &self.imports
    }

    /// New classes that match no component kind.
    pub fn unrecognized(&self) -> &[ClassName] {
        &self.unrecognized
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.imports.is_empty()
    }
}

/// The initial content of a component stylesheet: one empty rule block.
pub fn rule_block(class_name: &ClassName) -> String {
    format!(".{class_name} {{\n\n}}")
}

#[derive(Debug, Clone)]
pub enum PlanEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl PlanEntry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub kind: ComponentKind,
    pub class_name: ClassName,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
