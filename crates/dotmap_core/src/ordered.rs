//! The extended container with positional access over insertion order.

use std::fmt;
use std::ops::{Bound, Mul, RangeBounds};
use std::sync::Arc;

use crate::collections::DmVec;
use crate::convert::Target;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::record::Record;
use crate::sort::Sorter;
use crate::value::Value;

/// An extended mapping that additionally indexes entries by insertion
/// position.
///
/// Positional reads ([`at`](Self::at), [`slice`](Self::slice)) address the
/// Nth entry's value, so integer keys are rejected on write: such a key
/// would be unreachable and ambiguous with positional access. All other key
/// kinds normalize to strings as in [`Record`]. Nested mappings written into
/// this container become `OrderedRecord`s.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct OrderedRecord {
    inner: Record,
}

impl OrderedRecord {
    const NAME: &'static str = "OrderedRecord";

    /// Creates an empty ordered record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Record::new(),
        }
    }

    /// Builds an ordered record from any mapping-like value.
    ///
    /// This is the conversion path, so every key coerces to its string form,
    /// integer keys included. Non-mapping values produce an empty record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut record = Self::new();
        for (key, val) in value.mapping_entries() {
            record.inner.insert_converted(&key, &val, Target::Ordered);
        }
        record
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a key-not-found error if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.inner.get(key)
    }

    /// Reads the value stored under `key`, or `None` if absent.
    #[must_use]
    pub fn get_opt(&self, key: &str) -> Option<&Value> {
        self.inner.get_opt(key)
    }

    /// Returns true if the record contains the key, after normalization.
    #[must_use]
    pub fn contains(&self, key: impl Into<Value>) -> bool {
        self.inner.contains(key)
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys()
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter()
    }

    /// Reads the value of the entry at `index`.
    ///
    /// Negative indices count from the end, so `-1` is the last entry.
    ///
    /// # Errors
    ///
    /// Returns an index-out-of-bounds error if no entry has that position.
    #[allow(clippy::cast_possible_wrap)]
    pub fn at(&self, index: isize) -> Result<&Value> {
        let length = self.len();
        let resolved = if index < 0 {
            index + length as isize
        } else {
            index
        };
        usize::try_from(resolved)
            .ok()
            .and_then(|i| self.inner.entries().get_index(i))
            .map(|(_, value)| value)
            .ok_or_else(|| Error::index_out_of_bounds(index, length))
    }

    /// Reads the values of the entries in the given position range, in
    /// insertion order. Out-of-range bounds are clamped.
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<usize>) -> DmVec<Value> {
        let length = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => length,
        };
        let end = end.min(length);
        if start >= end {
            return DmVec::new();
        }
        self.values().skip(start).take(end - start).cloned().collect()
    }

    /// Stores `value` under the normalized `key`.
    ///
    /// # Errors
    ///
    /// Returns an illegal-key-type error if the key is an integer; nothing
    /// is written in that case.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        Self::check_key(&key)?;
        self.inner
            .insert_converted(&key, &value.into(), Target::Ordered);
        Ok(())
    }

    /// Merges the given entries into this record, mutating it.
    ///
    /// Later entries override earlier ones on key collision.
    ///
    /// # Errors
    ///
    /// Returns an illegal-key-type error if any key is an integer; every key
    /// is checked before anything is written.
    pub fn update<K, V, I>(&mut self, entries: I) -> Result<()>
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let staged: Vec<(Value, Value)> = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        for (key, _) in &staged {
            Self::check_key(key)?;
        }
        for (key, value) in &staged {
            self.inner.insert_converted(key, value, Target::Ordered);
        }
        Ok(())
    }

    /// Returns a deep copy of this record.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a new record with the given keys removed.
    ///
    /// Absent keys are silently ignored; the receiver is never mutated.
    #[must_use]
    pub fn crop(&self, keys: &[&str]) -> Self {
        Self {
            inner: self.inner.crop(keys),
        }
    }

    /// Returns a tuple of the values surviving a crop, in insertion order.
    #[must_use]
    pub fn crop_astuple(&self, keys: &[&str]) -> DmVec<Value> {
        self.crop(keys).slice(..)
    }

    /// Returns a new record merged with the given entries.
    ///
    /// # Errors
    ///
    /// Returns an illegal-key-type error if any key is an integer.
    pub fn add<K, V, I>(&self, entries: I) -> Result<Self>
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut new = self.copy();
        new.update(entries)?;
        Ok(new)
    }

    /// Returns a new record with one key set or overwritten.
    ///
    /// # Errors
    ///
    /// Returns an illegal-key-type error if the key is an integer.
    pub fn replace(&self, key: impl Into<Value>, value: impl Into<Value>) -> Result<Self> {
        let mut new = self.copy();
        new.insert(key, value)?;
        Ok(new)
    }

    /// Returns a recursively sorted copy of this record, with no exclusions.
    #[must_use]
    pub fn sorted(&self, reverse: bool) -> Self {
        Sorter::new().reverse(reverse).sorted_ordered(self)
    }

    /// Returns a new record with every top-level value multiplied by
    /// `factor` (not recursive).
    ///
    /// # Errors
    ///
    /// Returns an unsupported-operand error naming the offending key if any
    /// top-level value does not support multiplication.
    pub fn scale(&self, factor: i64) -> Result<Self> {
        Ok(Self {
            inner: self.inner.scale(factor)?,
        })
    }

    fn check_key(key: &Value) -> Result<()> {
        if key.kind() == Kind::Int {
            return Err(Error::illegal_key(Self::NAME, Kind::Int));
        }
        Ok(())
    }

    /// Builds an ordered record from already-normalized, already-converted
    /// entries.
    pub(crate) fn from_converted(entries: impl IntoIterator<Item = (Arc<str>, Value)>) -> Self {
        Self {
            inner: Record::from_converted(entries),
        }
    }

    pub(crate) fn entry_values(&self) -> Vec<(Value, Value)> {
        self.inner.entry_values()
    }
}

impl fmt::Debug for OrderedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for OrderedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Mul<i64> for &OrderedRecord {
    type Output = Result<OrderedRecord>;

    fn mul(self, factor: i64) -> Self::Output {
        self.scale(factor)
    }
}

impl Mul<&OrderedRecord> for i64 {
    type Output = Result<OrderedRecord>;

    fn mul(self, record: &OrderedRecord) -> Self::Output {
        record.scale(self)
    }
}
