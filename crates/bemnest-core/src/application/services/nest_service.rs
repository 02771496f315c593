//! Nest Service - main application orchestrator.
//!
//! This service coordinates one incremental scaffolding run:
//! 1. Read the HTML document and extract its classes
//! 2. Diff them against the ledger
//! 3. Plan and create the nested structure for new classes
//! 4. Import new blocks into the page's root stylesheet
//! 5. Store the current class set in the ledger
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ClassSource, Filesystem, LedgerStore},
        services::{
            ClassReport, ImportAggregator, RunReport, Scaffolder,
            scaffolder::ScaffoldOutcome,
        },
    },
    domain::{
        ClassName, ComponentKind, NestPlan, ProjectLayout, decompose, diff_new, kind_of,
    },
    error::NestResult,
};

/// Main scaffolding service.
pub struct NestService {
    layout: ProjectLayout,
    filesystem: Box<dyn Filesystem>,
    classes: Box<dyn ClassSource>,
    ledger: Box<dyn LedgerStore>,
}

impl NestService {
    /// Create a new nest service with the given layout and adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use bemnest_core::{application::NestService, domain::ProjectLayout};
    ///
    /// let service = NestService::new(
    ///     ProjectLayout::new("."),
    ///     filesystem, // impl Filesystem
    ///     classes,    // impl ClassSource
    ///     ledger,     // impl LedgerStore
    /// );
    /// ```
    pub fn new(
        layout: ProjectLayout,
        filesystem: Box<dyn Filesystem>,
        classes: Box<dyn ClassSource>,
        ledger: Box<dyn LedgerStore>,
    ) -> Self {
        Self {
            layout,
            filesystem,
            classes,
            ledger,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Scaffold everything new in `html_path`.
    #[instrument(skip_all, fields(html = %html_path.as_ref().display()))]
    pub fn run(&self, html_path: impl AsRef<Path>) -> NestResult<RunReport> {
        self.execute(html_path.as_ref(), false)
    }

    /// Compute what [`Self::run`] would do, without touching the filesystem.
    #[instrument(skip_all, fields(html = %html_path.as_ref().display()))]
    pub fn plan(&self, html_path: impl AsRef<Path>) -> NestResult<RunReport> {
        self.execute(html_path.as_ref(), true)
    }

    /// Every class in `html_path` with its kind, optionally only those of `only`.
    pub fn classify(
        &self,
        html_path: impl AsRef<Path>,
        only: Option<ComponentKind>,
    ) -> NestResult<Vec<ClassReport>> {
        let classes = self.read_classes(html_path.as_ref())?;

        let mut reports = Vec::with_capacity(classes.len());
        for class_name in classes {
            let kind = kind_of(class_name.as_str());
            if only.is_some() && kind != only {
                continue;
            }
            let directory = match kind {
                Some(kind) => {
                    let segments = decompose(&class_name, kind)?;
                    Some(self.layout.relative_component_dir(&segments))
                }
                None => None,
            };
            reports.push(ClassReport {
                class_name,
                kind,
                directory,
            });
        }

        Ok(reports)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn execute(&self, html_path: &Path, dry_run: bool) -> NestResult<RunReport> {
        self.layout.validate()?;

        let current = self.read_classes(html_path)?;
        let root_stylesheet = self.layout.root_stylesheet(html_path)?;
        info!(classes = current.len(), dry_run, "Classes extracted");

        if !dry_run {
            self.ensure_dir(&self.layout.blocks_root())?;
            self.ledger.ensure()?;
        }

        let known = self.ledger.load()?;
        let new_classes = diff_new(&current, &known);
        info!(
            known = known.len(),
            new = new_classes.len(),
            "Ledger diff computed"
        );

        let plan = NestPlan::build(&self.layout, &new_classes)?;
        for class_name in plan.unrecognized() {
            debug!(class = %class_name, "Class matches no BEM kind, skipping");
        }

        let scaffolder = Scaffolder::new(self.filesystem.as_ref());
        let aggregator = ImportAggregator::new(self.filesystem.as_ref());

        let (outcome, appended) = if dry_run {
            (
                scaffolder.preview(&plan)?,
                aggregator.preview(&root_stylesheet, plan.imports())?,
            )
        } else {
            let outcome = scaffolder.apply(&plan)?;
            self.ensure_dir(&self.layout.pages_root())?;
            let appended = aggregator.append_missing(&root_stylesheet, plan.imports())?;
            self.ledger.save(&current)?;
            (outcome, appended)
        };

        let ScaffoldOutcome {
            created_directories,
            created_files,
            kept_files,
        } = outcome;

        let report = RunReport {
            html: html_path.to_path_buf(),
            root_stylesheet,
            dry_run,
            total_classes: current.len(),
            unrecognized: plan.unrecognized().to_vec(),
            new_classes: new_classes.into_iter().collect(),
            created_directories,
            created_files,
            kept_files,
            appended_imports: appended.iter().map(ToString::to_string).collect(),
        };

        info!(
            directories = report.created_directories.len(),
            files = report.created_files.len(),
            imports = report.appended_imports.len(),
            "Run completed"
        );
        Ok(report)
    }

    /// Guard: the document must exist before anything else happens.
    fn read_classes(&self, html_path: &Path) -> NestResult<BTreeSet<ClassName>> {
        if !self.filesystem.exists(html_path) {
            return Err(ApplicationError::InputNotFound {
                path: html_path.to_path_buf(),
            }
            .into());
        }

        let document = self.filesystem.read_to_string(html_path)?;
        self.classes.class_names(&document)
    }

    fn ensure_dir(&self, path: &Path) -> NestResult<()> {
        if !self.filesystem.exists(path) {
            self.filesystem.create_dir_all(path)?;
            debug!(path = %path.display(), "Created directory");
        }
        Ok(())
    }
}
