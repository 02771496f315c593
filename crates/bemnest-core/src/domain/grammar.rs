//! BEM class-name grammar and classifier.
//!
//! # Grammar
//!
//! Every name is built from one atomic token `T`: lowercase ASCII letters,
//! optionally followed by a single hyphen and more lowercase letters
//! (`menu`, `main-menu`).
//!
//! | Kind             | Pattern              | Example               |
//! |------------------|----------------------|-----------------------|
//! | block            | `T`                  | `menu`                |
//! | block-modifier   | `T(_T){1,2}`         | `btn_size_large`      |
//! | element          | `T__T`               | `menu__item`          |
//! | element-modifier | `T__T(_T){1,2}`      | `menu__item_active`   |
//!
//! Patterns are anchored at both ends. `_` never starts a token, so a
//! double underscore can only ever be read as the element separator and
//! the four languages are disjoint.
//!
//! The compiled patterns carry named groups (`block`, `element`,
//! `modifier`); the decomposer in `segments.rs` reads its parts from the
//! same objects used for classification.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::{ClassName, ComponentKind};

/// The atomic token every BEM name segment is made of.
pub const NAME_PATTERN: &str = "[a-z]+(?:-[a-z]+)?";

static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::compile);

/// One compiled pattern per component kind, built once per process.
#[derive(Debug)]
pub struct Grammar {
    block: Regex,
    block_modifier: Regex,
    element: Regex,
    element_modifier: Regex,
}

impl Grammar {
    /// The process-wide grammar.
    pub fn get() -> &'static Grammar {
        &GRAMMAR
    }

    fn compile() -> Self {
        let build = |kind: ComponentKind| {
            Regex::new(&pattern_source(kind))
                .unwrap_or_else(|e| panic!("static {kind} pattern failed to compile: {e}"))
        };

        Self {
            block: build(ComponentKind::Block),
            block_modifier: build(ComponentKind::BlockModifier),
            element: build(ComponentKind::Element),
            element_modifier: build(ComponentKind::ElementModifier),
        }
    }

    /// The compiled pattern for `kind`.
    pub fn pattern(&self, kind: ComponentKind) -> &Regex {
        match kind {
            ComponentKind::Block => &self.block,
            ComponentKind::BlockModifier => &self.block_modifier,
            ComponentKind::Element => &self.element,
            ComponentKind::ElementModifier => &self.element_modifier,
        }
    }
}

/// Anchored pattern text for a kind.
pub fn pattern_source(kind: ComponentKind) -> String {
    let t = NAME_PATTERN;
    match kind {
        ComponentKind::Block => format!("^(?P<block>{t})$"),
        ComponentKind::BlockModifier => {
            format!("^(?P<block>{t})(?P<modifier>(?:_{t}){{1,2}})$")
        }
        ComponentKind::Element => format!("^(?P<block>{t})(?P<element>__{t})$"),
        ComponentKind::ElementModifier => {
            format!("^(?P<block>{t})(?P<element>__{t})(?P<modifier>(?:_{t}){{1,2}})$")
        }
    }
}

/// Whether `class_name` is, in full, a name of the given kind.
pub fn classify(class_name: &str, kind: ComponentKind) -> bool {
    Grammar::get().pattern(kind).is_match(class_name)
}

/// The first kind (in [`ComponentKind::ALL`] order) that `class_name` matches.
pub fn kind_of(class_name: &str) -> Option<ComponentKind> {
    ComponentKind::ALL
        .into_iter()
        .find(|kind| classify(class_name, *kind))
}

/// The members of `classes` that are names of `kind`, in sorted order.
pub fn partition(classes: &BTreeSet<ClassName>, kind: ComponentKind) -> Vec<ClassName> {
    classes
        .iter()
        .filter(|name| classify(name.as_str(), kind))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<ClassName> {
        names.iter().map(|n| ClassName::new(*n).unwrap()).collect()
    }

    #[test]
    fn all_patterns_compile() {
        for kind in ComponentKind::ALL {
            assert!(Regex::new(&pattern_source(kind)).is_ok(), "{kind}");
        }
    }

    #[test]
    fn blocks_are_only_blocks() {
        for name in ["header", "header-nav", "a"] {
            assert_eq!(kind_of(name), Some(ComponentKind::Block), "{name}");
            assert!(!classify(name, ComponentKind::BlockModifier));
            assert!(!classify(name, ComponentKind::Element));
            assert!(!classify(name, ComponentKind::ElementModifier));
        }
    }

    #[test]
    fn block_modifiers_allow_one_or_two_groups() {
        assert!(classify("btn_primary", ComponentKind::BlockModifier));
        assert!(classify("btn_size_large", ComponentKind::BlockModifier));
        assert!(classify("main-nav_theme_dark-blue", ComponentKind::BlockModifier));
        assert!(!classify("btn_a_b_c", ComponentKind::BlockModifier));
        assert!(kind_of("btn_a_b_c").is_none());
    }

    #[test]
    fn elements_need_exactly_one_double_underscore() {
        assert!(classify("menu__item", ComponentKind::Element));
        assert!(!classify("menu__item__link", ComponentKind::Element));
        assert!(!classify("menu__item", ComponentKind::BlockModifier));
        assert_eq!(kind_of("menu__item"), Some(ComponentKind::Element));
    }

    #[test]
    fn element_modifiers() {
        assert_eq!(
            kind_of("menu__item_active"),
            Some(ComponentKind::ElementModifier)
        );
        assert_eq!(
            kind_of("menu__item_size_large"),
            Some(ComponentKind::ElementModifier)
        );
        assert!(!classify("menu__item_active", ComponentKind::Element));
    }

    #[test]
    fn partial_matches_do_not_count() {
        for name in [
            "Header", "header2", "header--nav", "-header", "header-", "nav-bar-top", "_menu",
            "menu_", "menu___item", "js-menu__item_",
        ] {
            assert_eq!(kind_of(name), None, "{name}");
        }
    }

    #[test]
    fn partition_filters_and_sorts() {
        let classes = set(&["nav", "btn_primary", "app", "menu__item", "Foo"]);
        let blocks = partition(&classes, ComponentKind::Block);
        let names: Vec<&str> = blocks.iter().map(ClassName::as_str).collect();
        assert_eq!(names, ["app", "nav"]);
        assert!(partition(&classes, ComponentKind::ElementModifier).is_empty());
    }
}
