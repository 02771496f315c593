// ============================================================================
// domain/error.rs - BEM DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry into reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Contract Violations
    // ========================================================================
    #[error("unknown component kind '{kind}'")]
    InvalidKind { kind: String },

    #[error("class '{class_name}' is not a well-formed {kind}")]
    MalformedComponent { class_name: String, kind: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid class name '{class_name}': {reason}")]
    InvalidClassName { class_name: String, reason: String },

    #[error("invalid project layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("Duplicate path in plan: {path}")]
    DuplicatePath { path: String },

    #[error("Path escapes the project root: {path}")]
    PathOutsideRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidKind { kind } => vec![
                format!("'{kind}' is not a BEM component kind"),
                "Known kinds: block, block-modifier, element, element-modifier".into(),
            ],
            Self::MalformedComponent { class_name, kind } => vec![
                format!("'{class_name}' does not follow the {kind} naming pattern"),
                "Names use lowercase words joined by at most one hyphen".into(),
                "Elements use '__', modifiers use '_' (e.g. menu__item_active)".into(),
            ],
            Self::InvalidClassName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Check the class attributes in your HTML".into(),
            ],
            Self::InvalidLayout { reason } => vec![
                format!("Details: {reason}"),
                "Directory names must be single relative names (e.g. 'blocks')".into(),
                "The stylesheet extension is given without a dot (e.g. 'css')".into(),
            ],
            _ => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidKind { .. }
            | Self::InvalidClassName { .. }
            | Self::InvalidLayout { .. } => ErrorCategory::Validation,
            Self::MalformedComponent { .. } => ErrorCategory::Contract,
            Self::DuplicatePath { .. } | Self::PathOutsideRoot { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Contract,
    Internal,
}
