//! The deep-comparison engine.

use std::collections::{HashMap, HashSet};

use dotmap_core::{Kind, Shape, Value};

use crate::report::{DiffReport, Item, Path, Seg, TypeChange, ValueChange};

/// A deep-comparison engine with configurable kind equivalence.
///
/// Two values whose kinds fall in one equivalence group are compared
/// structurally instead of being reported as a type change; everything else
/// about the comparison is unaffected.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    groups: Vec<Vec<Kind>>,
}

impl Differ {
    /// Creates an engine with no equivalence groups: any kind difference is
    /// a type change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group of kinds treated as the same type during comparison.
    #[must_use]
    pub fn equivalent(mut self, kinds: &[Kind]) -> Self {
        self.groups.push(kinds.to_vec());
        self
    }

    /// Compares two values and reports every difference with its path.
    #[must_use]
    pub fn diff(&self, old: &Value, new: &Value) -> DiffReport {
        let mut report = DiffReport::default();
        self.walk(old, new, &Path::root(), &mut report);
        report
    }

    fn kinds_match(&self, a: Kind, b: Kind) -> bool {
        a == b
            || self
                .groups
                .iter()
                .any(|group| group.contains(&a) && group.contains(&b))
    }

    fn walk(&self, old: &Value, new: &Value, path: &Path, report: &mut DiffReport) {
        if !self.kinds_match(old.kind(), new.kind()) {
            report.type_changes.push(TypeChange {
                path: path.clone(),
                old_kind: old.kind(),
                new_kind: new.kind(),
                old: old.clone(),
                new: new.clone(),
            });
            return;
        }
        match (old.shape(), new.shape()) {
            (Shape::Mapping, Shape::Mapping) => self.diff_mapping(old, new, path, report),
            (Shape::Sequence, Shape::Sequence) => self.diff_sequence(old, new, path, report),
            _ => {
                if old != new {
                    report.values_changed.push(ValueChange {
                        path: path.clone(),
                        old: old.clone(),
                        new: new.clone(),
                    });
                }
            }
        }
    }

    fn diff_mapping(&self, old: &Value, new: &Value, path: &Path, report: &mut DiffReport) {
        let old_entries = old.mapping_entries();
        let new_entries = new.mapping_entries();
        let new_index: HashMap<&Value, &Value> =
            new_entries.iter().map(|(key, value)| (key, value)).collect();
        let old_keys: HashSet<&Value> = old_entries.iter().map(|(key, _)| key).collect();

        for (key, old_value) in &old_entries {
            let child = path.child(Seg::Key(key.clone()));
            match new_index.get(key) {
                Some(new_value) => self.walk(old_value, new_value, &child, report),
                None => report.items_removed.push(Item {
                    path: child,
                    value: old_value.clone(),
                }),
            }
        }
        for (key, new_value) in &new_entries {
            if !old_keys.contains(key) {
                report.items_added.push(Item {
                    path: path.child(Seg::Key(key.clone())),
                    value: new_value.clone(),
                });
            }
        }
    }

    fn diff_sequence(&self, old: &Value, new: &Value, path: &Path, report: &mut DiffReport) {
        if let (Value::Set(old_set), Value::Set(new_set)) = (old, new) {
            // Sets compare by membership; elements carry no position.
            for item in new_set.iter() {
                if !old_set.contains(item) {
                    report.items_added.push(Item {
                        path: path.clone(),
                        value: item.clone(),
                    });
                }
            }
            for item in old_set.iter() {
                if !new_set.contains(item) {
                    report.items_removed.push(Item {
                        path: path.clone(),
                        value: item.clone(),
                    });
                }
            }
            return;
        }

        let old_items = old.sequence_items();
        let new_items = new.sequence_items();
        let shared = old_items.len().min(new_items.len());
        for (i, (old_item, new_item)) in
            old_items.iter().zip(new_items.iter()).enumerate().take(shared)
        {
            self.walk(old_item, new_item, &path.child(Seg::Index(i)), report);
        }
        for (i, item) in new_items.iter().enumerate().skip(shared) {
            report.items_added.push(Item {
                path: path.child(Seg::Index(i)),
                value: item.clone(),
            });
        }
        for (i, item) in old_items.iter().enumerate().skip(shared) {
            report.items_removed.push(Item {
                path: path.child(Seg::Index(i)),
                value: item.clone(),
            });
        }
    }
}
