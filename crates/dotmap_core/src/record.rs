//! The extended container: a mapping with field-style access.

use std::fmt;
use std::ops::Mul;
use std::sync::Arc;

use crate::collections::DmMap;
use crate::convert::{Target, convert};
use crate::error::{Error, Result};
use crate::sort::Sorter;
use crate::value::Value;

/// An extended mapping with string-normalized keys.
///
/// Every key is normalized to its string representation on write, so key
/// access and field-style access are the same lookup. Every written value
/// passes through the recursive converter: nested mappings become `Record`s
/// and nested sequences keep their concrete kind with converted elements.
///
/// `insert` and `update` mutate in place; every other modifying operation
/// returns a new container and leaves the receiver untouched.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    entries: DmMap<Arc<str>, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DmMap::new(),
        }
    }

    /// Builds a record from any mapping-like value.
    ///
    /// Keys are string-normalized and nested structures are recursively
    /// converted, as with [`insert`](Self::insert). Non-mapping values
    /// produce an empty record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut record = Self::new();
        for (key, val) in value.mapping_entries() {
            record.insert_converted(&key, &val, Target::Record);
        }
        record
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Reads the value stored under `key`, or `None` if absent.
    #[must_use]
    pub fn get_opt(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if the record contains the key, after normalization.
    ///
    /// `Value::Int(5)` and `"5"` address the same entry.
    #[must_use]
    pub fn contains(&self, key: impl Into<Value>) -> bool {
        self.entries.contains_key(key.into().to_key().as_ref())
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(Arc::as_ref)
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Stores `value` under the normalized `key`.
    ///
    /// The value is recursively normalized first, so nested mappings become
    /// `Record`s. An existing key keeps its insertion position.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.insert_converted(&key.into(), &value.into(), Target::Record);
    }

    /// Merges the given entries into this record, mutating it.
    ///
    /// Later entries override earlier ones on key collision.
    pub fn update<K, V, I>(&mut self, entries: I)
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Returns a deep copy of this record.
    ///
    /// Values are owned trees, so `Clone` already has deep-copy semantics;
    /// mutating any container reachable from the copy never affects the
    /// original.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a new record with the given keys removed.
    ///
    /// Absent keys are silently ignored; the receiver is never mutated.
    #[must_use]
    pub fn crop(&self, keys: &[&str]) -> Self {
        let mut entries = self.entries.clone();
        for key in keys {
            entries = entries.remove(*key);
        }
        Self { entries }
    }

    /// Returns a new record merged with the given entries.
    ///
    /// Later entries override earlier ones; the receiver is never mutated.
    #[must_use]
    pub fn add<K, V, I>(&self, entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut new = self.copy();
        new.update(entries);
        new
    }

    /// Returns a new record with one key set or overwritten.
    ///
    /// The receiver is never mutated.
    #[must_use]
    pub fn replace(&self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        let mut new = self.copy();
        new.insert(key, value);
        new
    }

    /// Returns a recursively sorted copy of this record, with no exclusions.
    #[must_use]
    pub fn sorted(&self, reverse: bool) -> Self {
        Sorter::new().reverse(reverse).sorted_record(self)
    }

    /// Returns a new record with every top-level value multiplied by
    /// `factor` (not recursive).
    ///
    /// # Errors
    ///
    /// Returns an unsupported-operand error naming the offending key if any
    /// top-level value does not support multiplication.
    pub fn scale(&self, factor: i64) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| {
                value
                    .checked_mul(factor)
                    .map(|scaled| (Arc::clone(key), scaled))
                    .ok_or_else(|| Error::unsupported_operand(key.as_ref(), value.kind()))
            })
            .collect::<Result<DmMap<_, _>>>()?;
        Ok(Self { entries })
    }

    /// Normalizes the key, converts the value toward `target`, and stores
    /// the pair. Shared with the ordered variant, which converts toward
    /// itself.
    pub(crate) fn insert_converted(&mut self, key: &Value, value: &Value, target: Target) {
        self.entries = self.entries.insert(key.to_key(), convert(value, target));
    }

    /// Builds a record from already-normalized, already-converted entries.
    pub(crate) fn from_converted(entries: impl IntoIterator<Item = (Arc<str>, Value)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub(crate) fn entries(&self) -> &DmMap<Arc<str>, Value> {
        &self.entries
    }

    /// Entries with keys lifted into string values, for the generic
    /// mapping-entry view.
    pub(crate) fn entry_values(&self) -> Vec<(Value, Value)> {
        self.entries
            .iter()
            .map(|(k, v)| (Value::String(Arc::clone(k)), v.clone()))
            .collect()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.update(iter);
        record
    }
}

impl Mul<i64> for &Record {
    type Output = Result<Record>;

    fn mul(self, factor: i64) -> Self::Output {
        self.scale(factor)
    }
}

impl Mul<&Record> for i64 {
    type Output = Result<Record>;

    fn mul(self, record: &Record) -> Self::Output {
        record.scale(self)
    }
}
