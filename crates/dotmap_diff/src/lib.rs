//! Structural deep comparison for Dotmap values.
//!
//! This crate provides:
//! - [`Differ`] - A deep-comparison engine with configurable kind equivalence
//! - [`DiffReport`] - Categorized differences with `root['a'][0]` paths
//! - [`diff_containers`] - The engine preconfigured so the extended
//!   container family and plain mappings compare as the same type

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod differ;
mod report;

use dotmap_core::{Kind, Value};

pub use differ::Differ;
pub use report::{DiffReport, Item, Path, Seg, TypeChange, ValueChange};

/// Compares two values with the container family and plain mappings treated
/// as the same type.
///
/// A `Record {a: 1}` and a plain map `{"a": 1}` produce an empty report;
/// genuine value differences, additions, and removals are still reported
/// whichever family each side belongs to.
#[must_use]
pub fn diff_containers(old: &Value, new: &Value) -> DiffReport {
    Differ::new()
        .equivalent(&[Kind::Map, Kind::Record, Kind::Ordered])
        .diff(old, new)
}
