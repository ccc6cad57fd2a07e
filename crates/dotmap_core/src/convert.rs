//! Recursive normalization of nested values into the container family.
//!
//! The converter walks an arbitrary value and rebuilds it so that every
//! mapping-like substructure becomes the configured destination container,
//! while every sequence keeps its concrete kind with converted elements.
//! Scalars pass through unchanged. The walk is stateless per call and never
//! mutates its input.

use crate::collections::DmVec;
use crate::ordered::OrderedRecord;
use crate::record::Record;
use crate::value::Value;

/// Destination container type for nested mappings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Nested mappings become [`Record`]s.
    Record,
    /// Nested mappings become [`OrderedRecord`]s.
    Ordered,
}

/// Rebuilds `value` with every nested mapping converted to the `target`
/// container and every nested sequence preserved in kind.
///
/// Keys are string-normalized during mapping conversion, so the walk never
/// fails; the ordered container's integer-key rejection applies at its own
/// write API, not here.
#[must_use]
pub fn convert(value: &Value, target: Target) -> Value {
    match value {
        Value::Map(_) | Value::Record(_) | Value::Ordered(_) => convert_mapping(value, target),
        Value::List(items) => Value::List(convert_items(items, target)),
        Value::Tuple(items) => Value::Tuple(convert_items(items, target)),
        Value::Set(items) => Value::Set(items.iter().map(|item| convert(item, target)).collect()),
        scalar => scalar.clone(),
    }
}

fn convert_items(items: &DmVec<Value>, target: Target) -> DmVec<Value> {
    items.iter().map(|item| convert(item, target)).collect()
}

fn convert_mapping(value: &Value, target: Target) -> Value {
    let entries = value
        .mapping_entries()
        .into_iter()
        .map(|(key, val)| (key.to_key(), convert(&val, target)));
    match target {
        Target::Record => Value::Record(Record::from_converted(entries)),
        Target::Ordered => Value::Ordered(OrderedRecord::from_converted(entries)),
    }
}
