//! Integration tests for recursive conversion
//!
//! Tests the converter across mapping families, nested sequences, and
//! normalization of keys, including property-based idempotence checks.

use dotmap_core::collections::{DmMap, DmSet};
use dotmap_core::{Kind, OrderedRecord, Record, Target, Value, convert};
use proptest::prelude::*;

fn plain_map(entries: Vec<(Value, Value)>) -> Value {
    Value::Map(entries.into_iter().collect::<DmMap<_, _>>())
}

// =============================================================================
// Mapping Conversion
// =============================================================================

#[test]
fn map_converts_to_record() {
    let value = plain_map(vec![(Value::from("a"), Value::Int(1))]);
    let converted = convert(&value, Target::Record);
    assert_eq!(converted.kind(), Kind::Record);
}

#[test]
fn map_converts_to_ordered() {
    let value = plain_map(vec![(Value::from("a"), Value::Int(1))]);
    let converted = convert(&value, Target::Ordered);
    assert_eq!(converted.kind(), Kind::Ordered);
}

#[test]
fn record_retargets_to_ordered_and_back() {
    let record: Record = [("a", 1i64)].into_iter().collect();
    let value = Value::Record(record);

    let ordered = convert(&value, Target::Ordered);
    assert_eq!(ordered.kind(), Kind::Ordered);

    let back = convert(&ordered, Target::Record);
    assert_eq!(back, value);
}

#[test]
fn keys_normalize_during_conversion() {
    let value = plain_map(vec![
        (Value::Int(1), Value::from("one")),
        (Value::Bool(true), Value::from("yes")),
        (Value::Nil, Value::from("nothing")),
    ]);
    let converted = convert(&value, Target::Record);
    let record = converted.as_record().unwrap();

    assert_eq!(record.get("1").unwrap(), &Value::from("one"));
    assert_eq!(record.get("true").unwrap(), &Value::from("yes"));
    assert_eq!(record.get("nil").unwrap(), &Value::from("nothing"));
}

#[test]
fn colliding_normalized_keys_keep_the_last_value() {
    let value = plain_map(vec![
        (Value::Int(5), Value::from("int")),
        (Value::from("5"), Value::from("string")),
    ]);
    let converted = convert(&value, Target::Record);
    let record = converted.as_record().unwrap();

    assert_eq!(record.len(), 1);
    assert_eq!(record.get("5").unwrap(), &Value::from("string"));
}

#[test]
fn entry_order_is_preserved() {
    let value = plain_map(vec![
        (Value::from("z"), Value::Int(1)),
        (Value::from("a"), Value::Int(2)),
    ]);
    let converted = convert(&value, Target::Ordered);
    let keys: Vec<_> = converted.as_ordered().unwrap().keys().map(String::from).collect();
    assert_eq!(keys, vec!["z", "a"]);
}

// =============================================================================
// Sequences and Scalars
// =============================================================================

#[test]
fn sequences_keep_their_kind_and_convert_elements() {
    let inner = plain_map(vec![(Value::from("x"), Value::Int(1))]);
    let tuple = Value::Tuple([inner, Value::Int(2)].into_iter().collect());

    let converted = convert(&tuple, Target::Record);
    assert_eq!(converted.kind(), Kind::Tuple);
    let items = converted.sequence_items();
    assert_eq!(items[0].kind(), Kind::Record);
    assert_eq!(items[1], Value::Int(2));
}

#[test]
fn sets_convert_elements() {
    let inner = plain_map(vec![(Value::from("x"), Value::Int(1))]);
    let set = Value::Set([inner].into_iter().collect::<DmSet<_>>());

    let converted = convert(&set, Target::Record);
    let items = converted.sequence_items();
    assert_eq!(items[0].kind(), Kind::Record);
}

#[test]
fn scalars_pass_through_unchanged() {
    for scalar in [Value::Nil, Value::Bool(true), Value::Int(7), Value::from("s")] {
        assert_eq!(convert(&scalar, Target::Record), scalar);
        assert_eq!(convert(&scalar, Target::Ordered), scalar);
    }
}

#[test]
fn input_is_never_mutated() {
    let value = plain_map(vec![(Value::Int(1), Value::from("one"))]);
    let snapshot = value.clone();
    let _ = convert(&value, Target::Record);
    assert_eq!(value, snapshot);
}

// =============================================================================
// Properties
// =============================================================================

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn nested_value() -> impl Strategy<Value = Value> {
    scalar_value().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec((scalar_value(), inner), 0..4)
                .prop_map(plain_map),
        ]
    })
}

proptest! {
    #[test]
    fn conversion_is_idempotent(value in nested_value()) {
        let once = convert(&value, Target::Record);
        let twice = convert(&once, Target::Record);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn conversion_leaves_no_plain_mapping_behind(value in nested_value()) {
        fn has_plain_map(value: &Value) -> bool {
            match value.kind() {
                Kind::Map => true,
                _ => value
                    .mapping_entries()
                    .iter()
                    .any(|(_, v)| has_plain_map(v))
                    || value.sequence_items().iter().any(has_plain_map),
            }
        }
        let converted = convert(&value, Target::Record);
        prop_assert!(!has_plain_map(&converted));
    }

    #[test]
    fn retargeting_round_trips(value in nested_value()) {
        let record = convert(&value, Target::Record);
        let ordered = convert(&record, Target::Ordered);
        prop_assert_eq!(convert(&ordered, Target::Record), record);
    }
}

// =============================================================================
// Container Write Paths
// =============================================================================

#[test]
fn record_and_ordered_disagree_only_on_mapping_family() {
    let inner = plain_map(vec![(Value::from("x"), Value::Int(1))]);

    let mut record = Record::new();
    record.insert("inner", inner.clone());
    assert_eq!(record.get("inner").unwrap().kind(), Kind::Record);

    let mut ordered = OrderedRecord::new();
    ordered.insert("inner", inner).unwrap();
    assert_eq!(ordered.get("inner").unwrap().kind(), Kind::Ordered);
}
