//! Recursive, exclusion-aware sorting of nested values.
//!
//! Returns a new structure of the same shape where every mapping's entries
//! and every sequence's elements are reordered, unless a substructure matches
//! an exclusion rule or its elements are not mutually comparable. Sorting is
//! best-effort: an undecidable comparison leaves that substructure's
//! encountered order unchanged instead of failing.

use std::cmp::Ordering;

use crate::collections::{DmMap, DmVec};
use crate::ordered::OrderedRecord;
use crate::record::Record;
use crate::value::Value;

/// Exclusion rules evaluated independently at every nesting level.
///
/// Scalar markers match a mapping key or a sequence element; pair markers
/// match a key/value entry (mappings only). In the default OR mode one
/// matching marker excludes the substructure. In exclude-all mode both
/// marker groups must match: every scalar marker must appear (vacuously
/// satisfied when none were supplied) and every pair marker must appear,
/// with at least one pair supplied — so AND mode never excludes a mapping
/// on scalar markers alone. Sequences consult only the scalar group, which
/// must be non-empty and fully present.
#[derive(Clone, Debug, Default)]
struct Exclusions {
    items: Vec<Value>,
    pairs: Vec<(Value, Value)>,
    all: bool,
}

impl Exclusions {
    fn applies_to_mapping(&self, entries: &[(Value, Value)]) -> bool {
        let item_hit = |marker: &Value| entries.iter().any(|(key, _)| key == marker);
        let pair_hit = |pair: &(Value, Value)| entries.iter().any(|entry| entry == pair);
        if self.all {
            let items_matched = self.items.iter().all(item_hit);
            let pairs_matched = !self.pairs.is_empty() && self.pairs.iter().all(pair_hit);
            items_matched && pairs_matched
        } else {
            self.items.iter().any(item_hit) || self.pairs.iter().any(pair_hit)
        }
    }

    fn applies_to_sequence(&self, items: &[Value]) -> bool {
        let hit = |marker: &Value| items.contains(marker);
        if self.all {
            !self.items.is_empty() && self.items.iter().all(hit)
        } else {
            self.items.iter().any(hit)
        }
    }
}

/// A per-call recursive sort configuration.
///
/// Built once, applied to any number of values; no state survives an
/// [`apply`](Self::apply) call.
#[derive(Clone, Debug, Default)]
pub struct Sorter {
    exclusions: Exclusions,
    reverse: bool,
}

impl Sorter {
    /// Creates a sorter with no exclusions, sorting ascending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts descending instead of ascending.
    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Switches marker combination from OR to AND semantics.
    ///
    /// Under AND semantics a mapping is excluded only when every scalar
    /// marker and every pair marker is present, and at least one pair
    /// marker was supplied; a sequence is excluded when every scalar
    /// marker is present.
    #[must_use]
    pub fn exclude_all(mut self, all: bool) -> Self {
        self.exclusions.all = all;
        self
    }

    /// Adds a scalar marker: a mapping containing it as a key, or a sequence
    /// containing it as an element, is excluded from sorting.
    #[must_use]
    pub fn exclude_item(mut self, marker: impl Into<Value>) -> Self {
        self.exclusions.items.push(marker.into());
        self
    }

    /// Adds a pair marker: a mapping containing this exact entry is excluded
    /// from sorting. Sequences never match pair markers.
    #[must_use]
    pub fn exclude_pair(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.exclusions.pairs.push((key.into(), value.into()));
        self
    }

    /// Returns a recursively sorted copy of `value`.
    #[must_use]
    pub fn apply(&self, value: &Value) -> Value {
        self.walk(value)
    }

    fn walk(&self, value: &Value) -> Value {
        match value {
            Value::Map(map) => Value::Map(self.sorted_map(map)),
            Value::Record(record) => Value::Record(self.sorted_record(record)),
            Value::Ordered(record) => Value::Ordered(self.sorted_ordered(record)),
            Value::List(items) => Value::List(self.sorted_sequence(items)),
            Value::Tuple(items) => Value::Tuple(self.sorted_sequence(items)),
            Value::Set(items) => Value::Set(items.iter().map(|item| self.walk(item)).collect()),
            scalar => scalar.clone(),
        }
    }

    /// Orders a mapping's entries: exclusion and comparison both operate on
    /// the entries as encountered, before recursing into values.
    fn order_entries(&self, entries: Vec<(Value, Value)>) -> Vec<(Value, Value)> {
        if self.exclusions.applies_to_mapping(&entries) {
            return entries;
        }
        match try_sorted(&entries, entry_cmp, self.reverse) {
            Some(sorted) => sorted,
            None => entries,
        }
    }

    fn sorted_map(&self, map: &DmMap<Value, Value>) -> DmMap<Value, Value> {
        let entries = map
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        self.order_entries(entries)
            .into_iter()
            .map(|(key, value)| (key, self.walk(&value)))
            .collect()
    }

    pub(crate) fn sorted_record(&self, record: &Record) -> Record {
        let ordered = self.order_entries(record.entry_values());
        Record::from_converted(
            ordered
                .into_iter()
                .map(|(key, value)| (key.to_key(), self.walk(&value))),
        )
    }

    pub(crate) fn sorted_ordered(&self, record: &OrderedRecord) -> OrderedRecord {
        let ordered = self.order_entries(record.entry_values());
        OrderedRecord::from_converted(
            ordered
                .into_iter()
                .map(|(key, value)| (key.to_key(), self.walk(&value))),
        )
    }

    fn sorted_sequence(&self, items: &DmVec<Value>) -> DmVec<Value> {
        let originals: Vec<Value> = items.iter().cloned().collect();
        let excluded = self.exclusions.applies_to_sequence(&originals);
        let walked: Vec<Value> = originals.iter().map(|item| self.walk(item)).collect();
        if excluded {
            return walked.into_iter().collect();
        }
        match try_sorted(&walked, Value::partial_cmp, self.reverse) {
            Some(sorted) => sorted.into_iter().collect(),
            None => walked.into_iter().collect(),
        }
    }
}

/// Sorts every mapping's entries and every sequence's elements ascending,
/// with no exclusions.
#[must_use]
pub fn sort(value: &Value) -> Value {
    Sorter::new().apply(value)
}

/// Compares mapping entries as (key, value) pairs: by key first, values only
/// break ties between equal-comparing distinct keys.
fn entry_cmp(a: &(Value, Value), b: &(Value, Value)) -> Option<Ordering> {
    match a.0.partial_cmp(&b.0)? {
        Ordering::Equal => a.1.partial_cmp(&b.1),
        ord => Some(ord),
    }
}

/// Attempts a total sort under a partial comparator.
///
/// Returns `None` the moment any comparison is undecidable, leaving the
/// caller to keep the encountered order.
fn try_sorted<T: Clone>(
    items: &[T],
    cmp: impl Fn(&T, &T) -> Option<Ordering>,
    reverse: bool,
) -> Option<Vec<T>> {
    let mut out = items.to_vec();
    let mut decided = true;
    out.sort_by(|a, b| {
        cmp(a, b).unwrap_or_else(|| {
            decided = false;
            Ordering::Equal
        })
    });
    if !decided {
        return None;
    }
    if reverse {
        out.reverse();
    }
    Some(out)
}
