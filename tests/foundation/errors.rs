//! Integration tests for error types
//!
//! Tests error construction, classification, and display formatting.

use dotmap_core::{Error, ErrorKind, Kind};

#[test]
fn key_not_found_display() {
    let err = Error::key_not_found("missing");
    assert_eq!(err.to_string(), "key not found: missing");
    assert!(matches!(err.kind, ErrorKind::KeyNotFound(_)));
}

#[test]
fn index_out_of_bounds_display() {
    let err = Error::index_out_of_bounds(5, 3);
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfBounds { index: 5, length: 3 }
    ));
    let message = err.to_string();
    assert!(message.contains('5'));
    assert!(message.contains('3'));
}

#[test]
fn index_out_of_bounds_negative_index() {
    let err = Error::index_out_of_bounds(-4, 3);
    assert!(err.to_string().contains("-4"));
}

#[test]
fn illegal_key_display() {
    let err = Error::illegal_key("OrderedRecord", Kind::Int);
    assert_eq!(
        err.to_string(),
        "int keys cannot be added as OrderedRecord keys"
    );
}

#[test]
fn unsupported_operand_display() {
    let err = Error::unsupported_operand("price", Kind::Nil);
    assert_eq!(
        err.to_string(),
        "can't multiply value of key 'price' of type 'nil'"
    );
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::key_not_found("x"));
}
