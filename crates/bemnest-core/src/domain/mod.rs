// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for bemnest.
//!
//! This module contains pure BEM logic: the class-name grammar, the
//! decomposition of names into nested path segments, the project layout and
//! the run plan. All I/O is handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Deterministic**: class sets are `BTreeSet`s, plans are ordered
//!
// Public API - what the world sees
pub mod error;
pub mod grammar;
pub mod layout;
pub mod ledger;
pub mod plan;
pub mod segments;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use grammar::{Grammar, NAME_PATTERN, classify, kind_of, partition};
pub use layout::{ImportDirective, ProjectLayout, ROOT_STYLESHEET_PREAMBLE};
pub use ledger::{LedgerRecord, diff_new};
pub use plan::{DirectoryToCreate, FileToWrite, NestPlan, PlanEntry, rule_block};
pub use segments::{StructuralSegments, decompose};
pub use value_objects::{ClassName, ComponentKind};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::str::FromStr;

    use super::*;

    fn set(names: &[&str]) -> BTreeSet<ClassName> {
        names.iter().map(|n| ClassName::new(*n).unwrap()).collect()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn component_kind_parses_correctly() {
        assert_eq!(ComponentKind::from_str("block").unwrap(), ComponentKind::Block);
        assert_eq!(
            ComponentKind::from_str("Block Modifier").unwrap(),
            ComponentKind::BlockModifier
        );
        assert_eq!(
            ComponentKind::from_str("element_modifier").unwrap(),
            ComponentKind::ElementModifier
        );
        assert_eq!(ComponentKind::from_str("e").unwrap(), ComponentKind::Element);
    }

    #[test]
    fn unknown_kind_is_invalid_kind() {
        assert_eq!(
            ComponentKind::from_str("mixin"),
            Err(DomainError::InvalidKind {
                kind: "mixin".into()
            })
        );
    }

    #[test]
    fn component_kind_round_trips_through_display() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn class_name_rejects_empty_and_whitespace() {
        assert!(ClassName::new("").is_err());
        assert!(ClassName::new("menu item").is_err());
        assert!(ClassName::new("menu\titem").is_err());
        assert!(ClassName::new("promo\u{00A0}x").is_ok());
        assert_eq!(ClassName::new("menu").unwrap().as_str(), "menu");
    }

    // ========================================================================
    // Plan Tests
    // ========================================================================

    #[test]
    fn plan_for_menu_scenario() {
        let layout = ProjectLayout::new("/site");
        let plan = NestPlan::build(
            &layout,
            &set(&["menu", "menu__item", "menu__item_active", "btn_primary"]),
        )
        .unwrap();

        let dirs: Vec<PathBuf> = plan.directories().map(|d| d.path.clone()).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/site/blocks/menu"),
                PathBuf::from("/site/blocks/btn"),
                PathBuf::from("/site/blocks/btn/_primary"),
                PathBuf::from("/site/blocks/menu/__item"),
                PathBuf::from("/site/blocks/menu/__item/_active"),
            ]
        );

        let files: Vec<PathBuf> = plan.files().map(|f| f.path.clone()).collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/site/blocks/menu/menu.css"),
                PathBuf::from("/site/blocks/btn/_primary/btn_primary.css"),
                PathBuf::from("/site/blocks/menu/__item/menu__item.css"),
                PathBuf::from("/site/blocks/menu/__item/_active/menu__item_active.css"),
            ]
        );

        let imports: Vec<&str> = plan.imports().iter().map(ImportDirective::as_str).collect();
        assert_eq!(imports, ["@import url(../blocks/menu/menu.css);"]);
        assert!(plan.unrecognized().is_empty());
    }

    #[test]
    fn plan_files_hold_one_empty_rule() {
        let plan = NestPlan::build(&ProjectLayout::new("."), &set(&["card"])).unwrap();
        let file = plan.files().next().unwrap();
        assert_eq!(file.content, ".card {\n\n}");
        assert_eq!(file.kind, ComponentKind::Block);
    }

    #[test]
    fn plan_reports_unrecognized_classes() {
        let plan = NestPlan::build(&ProjectLayout::new("."), &set(&["js-hook2", "Title", "nav"]))
            .unwrap();
        let names: Vec<&str> = plan.unrecognized().iter().map(ClassName::as_str).collect();
        assert_eq!(names, ["Title", "js-hook2"]);
        assert_eq!(plan.files().count(), 1);
    }

    #[test]
    fn empty_input_gives_empty_plan() {
        let plan = NestPlan::build(&ProjectLayout::new("."), &BTreeSet::new()).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.entry_count(), 0);
    }

    #[test]
    fn plan_is_deterministic() {
        let classes = set(&["b__x_y", "a", "b", "a_m", "c__d"]);
        let layout = ProjectLayout::new("/p");
        let first: Vec<PathBuf> = NestPlan::build(&layout, &classes)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.path().clone())
            .collect();
        let second: Vec<PathBuf> = NestPlan::build(&layout, &classes)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.path().clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn plan_validation_rejects_duplicates() {
        let layout = ProjectLayout::new("/p");
        let mut plan = NestPlan::default();
        plan.add_directory("/p/blocks/a");
        plan.add_directory("/p/blocks/a");
        assert!(matches!(
            plan.validate(&layout),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn plan_validation_rejects_paths_outside_root() {
        let layout = ProjectLayout::new("/p");
        let mut plan = NestPlan::default();
        plan.add_stylesheet(
            "/elsewhere/a.css",
            ComponentKind::Block,
            ClassName::new("a").unwrap(),
        );
        assert!(matches!(
            plan.validate(&layout),
            Err(DomainError::PathOutsideRoot { .. })
        ));
    }
}
