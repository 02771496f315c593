//! Project layout: where every scaffolded file lives.
//!
//! ```text
//! <root>/
//! ├── .listOfUsedClasses.json        ← ledger
//! ├── blocks/
//! │   └── menu/
//! │       ├── menu.css
//! │       └── __item/
//! │           ├── menu__item.css
//! │           └── _active/
//! │               └── menu__item_active.css
//! └── pages/
//!     └── index.css                  ← root stylesheet for index.html
//! ```
//!
//! Every path is joined onto the root explicitly. Nothing here touches the
//! filesystem or the process working directory.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::{error::DomainError, segments::StructuralSegments, value_objects::ClassName};

pub const DEFAULT_BLOCKS_DIR: &str = "blocks";
pub const DEFAULT_PAGES_DIR: &str = "pages";
pub const DEFAULT_EXTENSION: &str = "css";
pub const DEFAULT_LEDGER_FILE: &str = ".listOfUsedClasses.json";

/// First line of a freshly created root stylesheet.
pub const ROOT_STYLESHEET_PREAMBLE: &str = "/* @import url(../vendor/normalize.css); */\n";

/// Directory names and extension that shape the nested file structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    blocks_dir: String,
    pages_dir: String,
    extension: String,
    ledger_file: String,
}

impl ProjectLayout {
    /// Layout with the default directory names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            blocks_dir: DEFAULT_BLOCKS_DIR.into(),
            pages_dir: DEFAULT_PAGES_DIR.into(),
            extension: DEFAULT_EXTENSION.into(),
            ledger_file: DEFAULT_LEDGER_FILE.into(),
        }
    }

    pub fn with_blocks_dir(mut self, name: impl Into<String>) -> Self {
        self.blocks_dir = name.into();
        self
    }

    pub fn with_pages_dir(mut self, name: impl Into<String>) -> Self {
        self.pages_dir = name.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_ledger_file(mut self, name: impl Into<String>) -> Self {
        self.ledger_file = name.into();
        self
    }

    /// Check that every configured name is a single relative path segment.
    ///
    /// Import directives are written as `../<blocks>/…` from the pages
    /// directory, which only holds when both are direct children of the root.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (what, name) in [
            ("blocks directory", &self.blocks_dir),
            ("pages directory", &self.pages_dir),
            ("ledger file", &self.ledger_file),
        ] {
            if !is_single_segment(name) {
                return Err(DomainError::InvalidLayout {
                    reason: format!("{what} '{name}' must be a single relative name"),
                });
            }
        }

        if self.blocks_dir == self.pages_dir {
            return Err(DomainError::InvalidLayout {
                reason: "blocks and pages directories must differ".into(),
            });
        }

        if self.extension.is_empty()
            || !self
                .extension
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(DomainError::InvalidLayout {
                reason: format!("stylesheet extension '{}' is not valid", self.extension),
            });
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn blocks_root(&self) -> PathBuf {
        self.root.join(&self.blocks_dir)
    }

    pub fn pages_root(&self) -> PathBuf {
        self.root.join(&self.pages_dir)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(&self.ledger_file)
    }

    /// Component directory relative to the blocks directory, e.g. `menu/__item`.
    pub fn relative_component_dir(&self, segments: &StructuralSegments) -> PathBuf {
        segments.directory_segments().into_iter().collect()
    }

    /// Absolute (root-joined) component directory.
    pub fn component_dir(&self, segments: &StructuralSegments) -> PathBuf {
        self.blocks_root()
            .join(self.relative_component_dir(segments))
    }

    /// Every directory level from the block down to the component, outermost first.
    pub fn directory_levels(&self, segments: &StructuralSegments) -> Vec<PathBuf> {
        let mut current = self.blocks_root();
        segments
            .directory_segments()
            .into_iter()
            .map(|segment| {
                current.push(segment);
                current.clone()
            })
            .collect()
    }

    pub fn stylesheet_file_name(&self, class_name: &ClassName) -> String {
        format!("{}.{}", class_name, self.extension)
    }

    /// `<component dir>/<class>.<ext>`.
    pub fn component_stylesheet(
        &self,
        segments: &StructuralSegments,
        class_name: &ClassName,
    ) -> PathBuf {
        self.component_dir(segments)
            .join(self.stylesheet_file_name(class_name))
    }

    /// Root stylesheet for a page: `<pages>/<html stem>.<ext>`.
    pub fn root_stylesheet(&self, html_path: &Path) -> Result<PathBuf, DomainError> {
        let stem = html_path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::InvalidLayout {
                reason: format!(
                    "cannot derive a stylesheet name from '{}'",
                    html_path.display()
                ),
            })?;

        Ok(self
            .pages_root()
            .join(format!("{stem}.{}", self.extension)))
    }

    /// `@import` line that pulls a block's stylesheet into a root stylesheet.
    pub fn import_directive(&self, block: &ClassName) -> ImportDirective {
        ImportDirective(format!(
            "@import url(../{}/{block}/{block}.{});",
            self.blocks_dir, self.extension
        ))
    }
}

fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// A single `@import url(...);` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportDirective(String);

impl ImportDirective {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directive followed by a line break, as appended to the stylesheet.
    pub fn line(&self) -> String {
        format!("{}\n", self.0)
    }

    /// Whether `stylesheet` already contains this directive verbatim.
    pub fn is_present_in(&self, stylesheet: &str) -> bool {
        stylesheet.contains(&self.0)
    }
}

impl fmt::Display for ImportDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
