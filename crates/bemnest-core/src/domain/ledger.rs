//! The used-classes ledger record and the incremental diff.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ClassName;

/// Persisted form of the ledger: `{ "used_classes": [...] }`.
///
/// Invariant: `used_classes` is sorted and free of duplicates when built
/// through [`LedgerRecord::from_classes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub used_classes: Vec<ClassName>,
}

impl LedgerRecord {
    pub fn from_classes(classes: &BTreeSet<ClassName>) -> Self {
        Self {
            used_classes: classes.iter().cloned().collect(),
        }
    }

    pub fn into_classes(self) -> BTreeSet<ClassName> {
        self.used_classes.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.used_classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used_classes.is_empty()
    }
}

/// Classes in `current` that the ledger does not know yet.
pub fn diff_new(current: &BTreeSet<ClassName>, known: &BTreeSet<ClassName>) -> BTreeSet<ClassName> {
    current.difference(known).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<ClassName> {
        names.iter().map(|n| ClassName::new(*n).unwrap()).collect()
    }

    #[test]
    fn diff_is_plain_subtraction() {
        let current = set(&["menu", "menu__item", "btn"]);
        let known = set(&["menu", "gone"]);
        assert_eq!(diff_new(&current, &known), set(&["btn", "menu__item"]));
    }

    #[test]
    fn diff_against_self_is_empty() {
        let current = set(&["menu", "btn"]);
        assert!(diff_new(&current, &current).is_empty());
    }

    #[test]
    fn record_is_sorted() {
        let record = LedgerRecord::from_classes(&set(&["nav", "app", "menu"]));
        let names: Vec<&str> = record.used_classes.iter().map(ClassName::as_str).collect();
        assert_eq!(names, ["app", "menu", "nav"]);
    }

    #[test]
    fn record_round_trips_through_sets() {
        let classes = set(&["b", "a__b", "a_c"]);
        assert_eq!(LedgerRecord::from_classes(&classes).into_classes(), classes);
    }
}
