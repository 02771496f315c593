//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bemnest-adapters` crate provides implementations.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::ClassName;
use crate::error::NestResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bemnest_adapters::filesystem::LocalFilesystem` (production)
/// - `bemnest_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths arrive already joined onto the project root
/// - No operation changes the process working directory
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NestResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> NestResult<String>;

    /// Write content to a file, truncating it.
    fn write_file(&self, path: &Path, content: &str) -> NestResult<()>;

    /// Append content to a file, creating it if needed.
    fn append_file(&self, path: &Path, content: &str) -> NestResult<()>;
}

/// Port for extracting class names from an HTML document.
///
/// Implemented by:
/// - `bemnest_adapters::html::ScraperClassSource`
pub trait ClassSource: Send + Sync {
    /// Every distinct class token on every element of `document`.
    fn class_names(&self, document: &str) -> NestResult<BTreeSet<ClassName>>;
}

/// Port for the used-classes ledger.
///
/// Implemented by:
/// - `bemnest_adapters::ledger::JsonLedgerStore`
#[cfg_attr(test, mockall::automock)]
pub trait LedgerStore: Send + Sync {
    /// Create an empty ledger if none exists yet.
    fn ensure(&self) -> NestResult<()>;

    /// All class names scaffolded so far; empty when there is no ledger.
    fn load(&self) -> NestResult<BTreeSet<ClassName>>;

    /// Replace the ledger with exactly `classes`.
    fn save(&self, classes: &BTreeSet<ClassName>) -> NestResult<()>;
}
