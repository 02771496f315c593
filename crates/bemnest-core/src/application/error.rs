//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not BEM
//! naming rules. Naming errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the scaffolding workflow.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The HTML document to scaffold from does not exist.
    #[error("HTML file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The ledger exists but cannot be decoded or encoded.
    #[error("Ledger at {path} is unreadable: {reason}")]
    LedgerCorrupt { path: PathBuf, reason: String },

    /// Shared adapter state could not be locked (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the path to your HTML file".into(),
                "Relative paths are resolved from the current directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-running is safe: existing files are never overwritten".into(),
            ],
            Self::LedgerCorrupt { path, .. } => vec![
                format!("Inspect or delete {}", path.display()),
                "Deleting the ledger makes the next run re-check every class".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::LedgerCorrupt { .. } => ErrorCategory::Validation,
        }
    }
}
