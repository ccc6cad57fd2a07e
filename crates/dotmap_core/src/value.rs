//! The closed value model for nested Dotmap data.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{DmMap, DmSet, DmVec};
use crate::kind::{Kind, Shape};
use crate::ordered::OrderedRecord;
use crate::record::Record;

/// A value in a nested structure.
///
/// Scalars are cheaply cloneable; sequences use persistent structures with
/// structural sharing. Cycles are unrepresentable: a `Value` is an owned
/// tree, so recursive algorithms over it always terminate.
#[derive(Clone)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Ordered sequence.
    List(DmVec<Value>),
    /// Immutable ordered sequence.
    Tuple(DmVec<Value>),
    /// Unordered collection of unique values.
    Set(DmSet<Value>),
    /// Plain mapping with arbitrary keys.
    Map(DmMap<Value, Value>),
    /// Extended container with string-normalized keys.
    Record(Record),
    /// Extended container with positional access.
    Ordered(OrderedRecord),
}

impl Value {
    /// Returns the concrete kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::List(_) => Kind::List,
            Self::Tuple(_) => Kind::Tuple,
            Self::Set(_) => Kind::Set,
            Self::Map(_) => Kind::Map,
            Self::Record(_) => Kind::Record,
            Self::Ordered(_) => Kind::Ordered,
        }
    }

    /// Returns the structural shape of this value.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.kind().shape()
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an ordered-sequence reference (list or tuple).
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&DmVec<Value>> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract a set reference.
    #[must_use]
    pub const fn as_set(&self) -> Option<&DmSet<Value>> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract a plain-map reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&DmMap<Value, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to extract a record reference.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Attempts to extract an ordered-record reference.
    #[must_use]
    pub const fn as_ordered(&self) -> Option<&OrderedRecord> {
        match self {
            Self::Ordered(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the key/value pairs of a mapping-like value in encountered
    /// order, with record keys presented as string values.
    ///
    /// Returns an empty vector for non-mappings.
    #[must_use]
    pub fn mapping_entries(&self) -> Vec<(Value, Value)> {
        match self {
            Self::Map(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Self::Record(record) => record.entry_values(),
            Self::Ordered(record) => record.entry_values(),
            _ => Vec::new(),
        }
    }

    /// Returns the elements of a sequence-like value.
    ///
    /// Returns an empty vector for non-sequences.
    #[must_use]
    pub fn sequence_items(&self) -> Vec<Value> {
        match self {
            Self::List(items) | Self::Tuple(items) => items.iter().cloned().collect(),
            Self::Set(items) => items.iter().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Multiplies this value by an integer factor, if its kind supports it.
    ///
    /// Integers and floats multiply numerically, with integer products
    /// saturating at the 64-bit bounds; strings, lists, and tuples repeat
    /// (a non-positive factor empties them). Every other kind returns
    /// `None`.
    #[must_use]
    pub fn checked_mul(&self, factor: i64) -> Option<Self> {
        match self {
            Self::Int(n) => Some(Self::Int(n.saturating_mul(factor))),
            #[allow(clippy::cast_precision_loss)]
            Self::Float(n) => Some(Self::Float(n * factor as f64)),
            Self::String(s) => {
                let count = usize::try_from(factor).unwrap_or(0);
                Some(Self::String(s.repeat(count).into()))
            }
            Self::List(items) => Some(Self::List(repeat_items(items, factor))),
            Self::Tuple(items) => Some(Self::Tuple(repeat_items(items, factor))),
            _ => None,
        }
    }

    /// Normalizes this value into a container key.
    ///
    /// Strings pass through; every other kind uses its display rendering, so
    /// `5` and `"5"` address the same entry.
    pub(crate) fn to_key(&self) -> Arc<str> {
        match self {
            Self::String(s) => Arc::clone(s),
            other => Arc::from(other.to_string().as_str()),
        }
    }
}

fn repeat_items(items: &DmVec<Value>, factor: i64) -> DmVec<Value> {
    let count = usize::try_from(factor).unwrap_or(0);
    (0..count).flat_map(|_| items.iter().cloned()).collect()
}

/// Lexicographic comparison of two sequences; undecidable as soon as one
/// element pair is undecidable.
fn sequence_cmp(a: &DmVec<Value>, b: &DmVec<Value>) -> Option<Ordering> {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
    }
    Some(a.len().cmp(&b.len()))
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Ordered(a), Self::Ordered(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::List(items) | Self::Tuple(items) => items.hash(state),
            Self::Set(items) => items.hash(state),
            Self::Map(map) => map.hash(state),
            Self::Record(record) => record.hash(state),
            Self::Ordered(record) => record.hash(state),
        }
    }
}

impl PartialOrd for Value {
    /// The natural order attempt: same-type scalars compare directly,
    /// integers and floats compare across, lists and tuples compare
    /// lexicographically. Everything else is undecidable (`None`), which the
    /// sort treats as "leave the encountered order unchanged".
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            // Cross-type numeric comparison intentionally loses precision for large i64
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => {
                sequence_cmp(a, b)
            }
            _ => None, // Different types or non-comparable
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(f, "{items:?}"),
            Self::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, ")")
            }
            Self::Set(items) => write!(f, "{items:?}"),
            Self::Map(map) => write!(f, "{map:?}"),
            Self::Record(record) => write!(f, "{record:?}"),
            Self::Ordered(record) => write!(f, "{record:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Self::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Record(record) => write!(f, "{record}"),
            Self::Ordered(record) => write!(f, "{record}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<OrderedRecord> for Value {
    fn from(record: OrderedRecord) -> Self {
        Self::Ordered(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
