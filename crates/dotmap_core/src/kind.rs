//! Kind and shape descriptors for values.

use std::fmt;

/// Concrete kind of a [`Value`](crate::Value).
///
/// Used in error messages and by the diff engine's type-equivalence
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The nil kind.
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Ordered sequence.
    List,
    /// Immutable ordered sequence.
    Tuple,
    /// Unordered collection of unique values.
    Set,
    /// Plain mapping with arbitrary keys.
    Map,
    /// Extended container with string-normalized keys.
    Record,
    /// Extended container with positional access.
    Ordered,
}

impl Kind {
    /// Returns the lowercase name used in messages and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
            Self::Map => "map",
            Self::Record => "record",
            Self::Ordered => "ordered record",
        }
    }

    /// Returns the structural shape this kind dispatches as.
    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            Self::Map | Self::Record | Self::Ordered => Shape::Mapping,
            Self::List | Self::Tuple | Self::Set => Shape::Sequence,
            Self::Nil | Self::Bool | Self::Int | Self::Float | Self::String => Shape::Scalar,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural classification dispatched over by the converter and the sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Anything exposing enumerable key/value pairs.
    Mapping,
    /// Ordered, immutable-ordered, or unordered-unique collection.
    Sequence,
    /// Anything that is neither mapping-like nor sequence-like.
    Scalar,
}
