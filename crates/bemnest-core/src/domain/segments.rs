//! Decomposition of a classified name into its structural segments.
//!
//! Segments keep their separators (`__item`, `_active`) because they are
//! used verbatim as directory names in the nested layout.

use regex::Captures;

use crate::domain::{
    error::DomainError,
    grammar::Grammar,
    value_objects::{ClassName, ComponentKind},
};

/// The parts of a BEM name needed to build its nested path.
///
/// Invariant: concatenating the segments in order reproduces the class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralSegments {
    Block {
        name: String,
    },
    BlockModifier {
        block: String,
        modifier: String,
    },
    Element {
        block: String,
        element: String,
    },
    ElementModifier {
        block: String,
        element: String,
        modifier: String,
    },
}

impl StructuralSegments {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Block { .. } => ComponentKind::Block,
            Self::BlockModifier { .. } => ComponentKind::BlockModifier,
            Self::Element { .. } => ComponentKind::Element,
            Self::ElementModifier { .. } => ComponentKind::ElementModifier,
        }
    }

    /// The block every component is nested under.
    pub fn block(&self) -> &str {
        match self {
            Self::Block { name } => name,
            Self::BlockModifier { block, .. }
            | Self::Element { block, .. }
            | Self::ElementModifier { block, .. } => block,
        }
    }

    /// Directory names from the blocks directory down to the component.
    pub fn directory_segments(&self) -> Vec<&str> {
        match self {
            Self::Block { name } => vec![name.as_str()],
            Self::BlockModifier { block, modifier } => vec![block.as_str(), modifier.as_str()],
            Self::Element { block, element } => vec![block.as_str(), element.as_str()],
            Self::ElementModifier {
                block,
                element,
                modifier,
            } => vec![block.as_str(), element.as_str(), modifier.as_str()],
        }
    }

    /// Rebuild the class name from the segments.
    pub fn reassemble(&self) -> String {
        self.directory_segments().concat()
    }
}

/// Split `class_name` into the segments of `kind`.
///
/// The modifier segment is the complete modifier suffix, so
/// `btn_size_large` yields `btn` + `_size_large`.
///
/// # Errors
///
/// [`DomainError::MalformedComponent`] if the name is not of that kind;
/// nothing is partially built.
pub fn decompose(
    class_name: &ClassName,
    kind: ComponentKind,
) -> Result<StructuralSegments, DomainError> {
    let malformed = || DomainError::MalformedComponent {
        class_name: class_name.to_string(),
        kind: kind.to_string(),
    };

    let caps = Grammar::get()
        .pattern(kind)
        .captures(class_name.as_str())
        .ok_or_else(malformed)?;
    let part = |name: &str| group(&caps, name).ok_or_else(malformed);

    Ok(match kind {
        ComponentKind::Block => StructuralSegments::Block {
            name: part("block")?,
        },
        ComponentKind::BlockModifier => StructuralSegments::BlockModifier {
            block: part("block")?,
            modifier: part("modifier")?,
        },
        ComponentKind::Element => StructuralSegments::Element {
            block: part("block")?,
            element: part("element")?,
        },
        ComponentKind::ElementModifier => StructuralSegments::ElementModifier {
            block: part("block")?,
            element: part("element")?,
            modifier: part("modifier")?,
        },
    })
}

fn group(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ClassName {
        ClassName::new(s).unwrap()
    }

    #[test]
    fn block_is_its_own_segment() {
        let segs = decompose(&name("header-nav"), ComponentKind::Block).unwrap();
        assert_eq!(
            segs,
            StructuralSegments::Block {
                name: "header-nav".into()
            }
        );
        assert_eq!(segs.directory_segments(), ["header-nav"]);
    }

    #[test]
    fn block_modifier_keeps_full_suffix() {
        let segs = decompose(&name("btn_size_large"), ComponentKind::BlockModifier).unwrap();
        assert_eq!(
            segs,
            StructuralSegments::BlockModifier {
                block: "btn".into(),
                modifier: "_size_large".into()
            }
        );
        assert_eq!(segs.directory_segments(), ["btn", "_size_large"]);
    }

    #[test]
    fn element_splits_on_double_underscore() {
        let segs = decompose(&name("menu__item"), ComponentKind::Element).unwrap();
        assert_eq!(segs.directory_segments(), ["menu", "__item"]);
        assert_eq!(segs.block(), "menu");
    }

    #[test]
    fn element_modifier_has_three_levels() {
        let segs = decompose(&name("main-menu__item_theme_dark"), ComponentKind::ElementModifier)
            .unwrap();
        assert_eq!(
            segs.directory_segments(),
            ["main-menu", "__item", "_theme_dark"]
        );
        assert_eq!(segs.kind(), ComponentKind::ElementModifier);
    }

    #[test]
    fn segments_reassemble_to_the_class_name() {
        for (class, kind) in [
            ("menu", ComponentKind::Block),
            ("btn_primary", ComponentKind::BlockModifier),
            ("menu__item", ComponentKind::Element),
            ("menu__item_active", ComponentKind::ElementModifier),
            ("a-b__c-d_e-f_g-h", ComponentKind::ElementModifier),
        ] {
            let segs = decompose(&name(class), kind).unwrap();
            assert_eq!(segs.reassemble(), class);
            assert_eq!(segs.directory_segments().len(), kind.depth());
        }
    }

    #[test]
    fn wrong_kind_fails_fast() {
        let err = decompose(&name("menu__item"), ComponentKind::Block).unwrap_err();
        assert!(matches!(err, DomainError::MalformedComponent { .. }));

        let err = decompose(&name("Menu"), ComponentKind::Block).unwrap_err();
        assert_eq!(
            err,
            DomainError::MalformedComponent {
                class_name: "Menu".into(),
                kind: "block".into()
            }
        );
    }
}
