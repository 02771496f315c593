//! Import aggregator - keeps a page's root stylesheet importing every block.
//!
//! Append-only: directives are never removed or reordered, and a directive
//! whose text already appears in the stylesheet is not written again.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ImportDirective, ROOT_STYLESHEET_PREAMBLE},
    error::NestResult,
};

pub struct ImportAggregator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ImportAggregator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Append the directives `stylesheet` does not contain yet.
    ///
    /// A missing stylesheet is first created with the preamble line.
    /// Returns the directives actually appended.
    #[instrument(skip_all, fields(stylesheet = %stylesheet.display()))]
    pub fn append_missing(
        &self,
        stylesheet: &Path,
        directives: &[ImportDirective],
    ) -> NestResult<Vec<ImportDirective>> {
        if !self.filesystem.exists(stylesheet) {
            if let Some(parent) = stylesheet.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem
                .write_file(stylesheet, ROOT_STYLESHEET_PREAMBLE)?;
            info!("Created root stylesheet");
        }

        let current = self.filesystem.read_to_string(stylesheet)?;
        let missing = missing_directives(&current, directives);
        if missing.is_empty() {
            debug!("Root stylesheet already imports every block");
            return Ok(missing);
        }

        let appended: String = missing.iter().map(ImportDirective::line).collect();
        self.filesystem.append_file(stylesheet, &appended)?;
        info!(count = missing.len(), "Appended block imports");

        Ok(missing)
    }

    /// The directives [`Self::append_missing`] would append, without writing.
    pub fn preview(
        &self,
        stylesheet: &Path,
        directives: &[ImportDirective],
    ) -> NestResult<Vec<ImportDirective>> {
        let current = if self.filesystem.exists(stylesheet) {
            self.filesystem.read_to_string(stylesheet)?
        } else {
            ROOT_STYLESHEET_PREAMBLE.to_string()
        };
        Ok(missing_directives(&current, directives))
    }
}

/// Directives absent from `current`, each at most once, in input order.
fn missing_directives(current: &str, directives: &[ImportDirective]) -> Vec<ImportDirective> {
    let mut missing: Vec<ImportDirective> = Vec::new();
    for directive in directives {
        if !directive.is_present_in(current) && !missing.contains(directive) {
            missing.push(directive.clone());
        }
    }
    missing
}
