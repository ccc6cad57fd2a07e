//! Integration tests for the extended containers
//!
//! Tests Record, OrderedRecord, recursive conversion, and recursive sorting
//! through the public API.

mod convert;
mod record;
