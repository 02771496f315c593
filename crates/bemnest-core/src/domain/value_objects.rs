//! Domain value objects: ComponentKind, ClassName.
//!
//! # Design
//!
//! These are pure value types, equality-by-value, no identity. Grammar
//! lives in `grammar.rs` and path building in `layout.rs`; this file only
//! defines the types, their string representations and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

// ── ComponentKind ────────────────────────────────────────────────────────────

/// The four BEM entity categories a class name can represent.
///
/// The declaration order is the evaluation order used when a class is
/// classified without a target kind (first match wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Block,
    BlockModifier,
    Element,
    ElementModifier,
}

impl ComponentKind {
    /// All kinds, in evaluation order.
    pub const ALL: [ComponentKind; 4] = [
        Self::Block,
        Self::BlockModifier,
        Self::Element,
        Self::ElementModifier,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::BlockModifier => "block-modifier",
            Self::Element => "element",
            Self::ElementModifier => "element-modifier",
        }
    }

    /// Number of nested directories below the blocks directory.
    pub const fn depth(&self) -> usize {
        match self {
            Self::Block => 1,
            Self::BlockModifier | Self::Element => 2,
            Self::ElementModifier => 3,
        }
    }

    /// Whether the kind gets an `@import` line in the root stylesheet.
    pub const fn is_importable(&self) -> bool {
        matches!(self, Self::Block)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "block" | "b" => Ok(Self::Block),
            "block-modifier" | "bm" => Ok(Self::BlockModifier),
            "element" | "e" => Ok(Self::Element),
            "element-modifier" | "em" => Ok(Self::ElementModifier),
            _ => Err(DomainError::InvalidKind { kind: s.to_string() }),
        }
    }
}

// ── ClassName ────────────────────────────────────────────────────────────────

/// A single CSS class token taken from a `class` attribute.
///
/// Invariant: non-empty, no ASCII whitespace (the separator of a `class`
/// attribute). Ordering is lexicographic so that
/// `BTreeSet<ClassName>` serializes deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName(String);

impl ClassName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidClassName {
                class_name: value,
                reason: "class name cannot be empty".into(),
            });
        }
        if value.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(DomainError::InvalidClassName {
                class_name: value,
                reason: "class name cannot contain whitespace".into(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ClassName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClassName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> Self {
        name.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
