//! Error types for Dotmap operations.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::kind::Kind;

/// Result alias for Dotmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Dotmap operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a key-not-found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound(key.into()))
    }

    /// Creates an index-out-of-bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: isize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an illegal-key-type error.
    #[must_use]
    pub fn illegal_key(container: &'static str, kind: Kind) -> Self {
        Self::new(ErrorKind::IllegalKeyType { container, kind })
    }

    /// Creates an unsupported-operand error for scalar multiplication.
    #[must_use]
    pub fn unsupported_operand(key: impl Into<String>, kind: Kind) -> Self {
        Self::new(ErrorKind::UnsupportedOperand {
            key: key.into(),
            kind,
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Read of an absent key; never recovered internally.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Positional read outside the entry range.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed (possibly negative).
        index: isize,
        /// The actual number of entries.
        length: usize,
    },

    /// Key of a forbidden type written to a container.
    #[error("{kind} keys cannot be added as {container} keys")]
    IllegalKeyType {
        /// Name of the rejecting container type.
        container: &'static str,
        /// The kind of the offending key.
        kind: Kind,
    },

    /// Scalar multiplication hit a value that does not support it.
    #[error("can't multiply value of key '{key}' of type '{kind}'")]
    UnsupportedOperand {
        /// The key whose value rejected the multiplication.
        key: String,
        /// The kind of the offending value.
        kind: Kind,
    },
}
