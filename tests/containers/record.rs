//! Integration tests for Record
//!
//! Tests key normalization, recursive write conversion, non-mutating
//! operations, and scalar multiplication.

use dotmap_core::collections::DmMap;
use dotmap_core::{ErrorKind, Kind, Record, Value};

fn sample() -> Record {
    [("name", Value::from("widget")), ("count", Value::Int(3))]
        .into_iter()
        .collect()
}

// =============================================================================
// Key Access and Normalization
// =============================================================================

#[test]
fn get_by_string_key() {
    let record = sample();
    assert_eq!(record.get("name").unwrap(), &Value::from("widget"));
}

#[test]
fn get_absent_key_is_an_error() {
    let record = sample();
    let err = record.get("absent").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::KeyNotFound(_)));
    assert_eq!(err.to_string(), "key not found: absent");
}

#[test]
fn non_string_keys_normalize_to_strings() {
    let mut record = Record::new();
    record.insert(5i64, "five");
    record.insert(1.5f64, "one-and-a-half");
    record.insert(true, "yes");

    assert_eq!(record.get("5").unwrap(), &Value::from("five"));
    assert_eq!(record.get("1.5").unwrap(), &Value::from("one-and-a-half"));
    assert_eq!(record.get("true").unwrap(), &Value::from("yes"));
}

#[test]
fn int_key_and_its_string_form_are_one_entry() {
    let mut record = Record::new();
    record.insert(5i64, "first");
    record.insert("5", "second");

    assert_eq!(record.len(), 1);
    assert_eq!(record.get("5").unwrap(), &Value::from("second"));
    assert!(record.contains(5i64));
    assert!(record.contains("5"));
}

#[test]
fn insertion_order_is_preserved() {
    let mut record = Record::new();
    record.insert("z", 1i64);
    record.insert("a", 2i64);
    record.insert("m", 3i64);

    let keys: Vec<_> = record.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn overwrite_keeps_insertion_position() {
    let mut record = Record::new();
    record.insert("a", 1i64);
    record.insert("b", 2i64);
    record.insert("a", 9i64);

    let keys: Vec<_> = record.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(record.get("a").unwrap(), &Value::Int(9));
}

// =============================================================================
// Recursive Write Conversion
// =============================================================================

#[test]
fn nested_map_becomes_record() {
    let inner: DmMap<Value, Value> = [(Value::Int(1), Value::from("one"))]
        .into_iter()
        .collect();
    let mut record = Record::new();
    record.insert("inner", Value::Map(inner));

    let inner = record.get("inner").unwrap().as_record().unwrap();
    assert_eq!(inner.get("1").unwrap(), &Value::from("one"));
}

#[test]
fn deeply_nested_maps_convert_at_every_level() {
    let leaf: DmMap<Value, Value> = [(Value::from("x"), Value::Int(1))]
        .into_iter()
        .collect();
    let middle: DmMap<Value, Value> = [(Value::from("leaf"), Value::Map(leaf))]
        .into_iter()
        .collect();
    let mut record = Record::new();
    record.insert("middle", Value::Map(middle));

    let middle = record.get("middle").unwrap().as_record().unwrap();
    assert_eq!(middle.get("leaf").unwrap().kind(), Kind::Record);
}

#[test]
fn mappings_inside_sequences_convert() {
    let inner: DmMap<Value, Value> = [(Value::from("x"), Value::Int(1))]
        .into_iter()
        .collect();
    let mut record = Record::new();
    record.insert("items", vec![Value::Map(inner), Value::Int(2)]);

    let items = record.get("items").unwrap().sequence_items();
    assert_eq!(items[0].kind(), Kind::Record);
    assert_eq!(items[1], Value::Int(2));
}

#[test]
fn sequence_kind_survives_conversion() {
    let tuple = Value::Tuple([Value::Int(1), Value::Int(2)].into_iter().collect());
    let mut record = Record::new();
    record.insert("pair", tuple);
    assert_eq!(record.get("pair").unwrap().kind(), Kind::Tuple);
}

// =============================================================================
// Non-mutating Operations
// =============================================================================

#[test]
fn crop_removes_keys_without_mutating() {
    let record = sample();
    let cropped = record.crop(&["name"]);

    assert!(cropped.get_opt("name").is_none());
    assert_eq!(cropped.len(), 1);
    assert_eq!(record.len(), 2);
}

#[test]
fn crop_ignores_absent_keys() {
    let record = sample();
    let cropped = record.crop(&["nope", "also-nope"]);
    assert_eq!(cropped.len(), 2);
}

#[test]
fn add_merges_without_mutating() {
    let record = sample();
    let merged = record.add([("color", "red")]);

    assert_eq!(merged.get("color").unwrap(), &Value::from("red"));
    assert_eq!(merged.len(), 3);
    assert!(record.get_opt("color").is_none());
}

#[test]
fn add_later_entries_override() {
    let record = sample();
    let merged = record.add([("count", 9i64)]);
    assert_eq!(merged.get("count").unwrap(), &Value::Int(9));
    assert_eq!(record.get("count").unwrap(), &Value::Int(3));
}

#[test]
fn replace_sets_one_key_without_mutating() {
    let record = sample();
    let replaced = record.replace("count", 10i64);

    assert_eq!(replaced.get("count").unwrap(), &Value::Int(10));
    assert_eq!(record.get("count").unwrap(), &Value::Int(3));
}

#[test]
fn copy_yields_an_independent_deep_tree() {
    let mut record = Record::new();
    record.insert("inner", Record::from_iter([("x", 1i64)]));

    let mut copy = record.copy();
    copy.insert("inner", Record::from_iter([("x", 2i64)]));

    let original = record.get("inner").unwrap().as_record().unwrap();
    assert_eq!(original.get("x").unwrap(), &Value::Int(1));
}

// =============================================================================
// Scalar Multiplication
// =============================================================================

#[test]
fn scale_multiplies_each_top_level_value() {
    let mut record = Record::new();
    record.insert("n", 3i64);
    record.insert("f", 1.5f64);
    record.insert("s", "ab");

    let doubled = record.scale(2).unwrap();
    assert_eq!(doubled.get("n").unwrap(), &Value::Int(6));
    assert_eq!(doubled.get("f").unwrap(), &Value::Float(3.0));
    assert_eq!(doubled.get("s").unwrap(), &Value::from("abab"));
}

#[test]
fn scale_is_not_recursive() {
    let mut record = Record::new();
    record.insert("inner", Record::from_iter([("x", 1i64)]));

    let err = record.scale(2).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedOperand { .. }));
}

#[test]
fn scale_error_names_the_offending_key() {
    let mut record = Record::new();
    record.insert("ok", 1i64);
    record.insert("bad", Value::Nil);

    let err = record.scale(2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "can't multiply value of key 'bad' of type 'nil'"
    );
}

#[test]
fn mul_operator_both_sides() {
    let record = sample().crop(&["name"]);
    assert_eq!((&record * 2).unwrap(), (2 * &record).unwrap());
}

// =============================================================================
// Equality and Display
// =============================================================================

#[test]
fn equality_is_structural() {
    let a = sample();
    let b = sample();
    assert_eq!(a, b);
    assert_ne!(a, b.replace("count", 4i64));
}

#[test]
fn display_shows_entries() {
    let mut record = Record::new();
    record.insert("a", 1i64);
    record.insert("b", 2i64);
    assert_eq!(record.to_string(), "{a: 1, b: 2}");
}
