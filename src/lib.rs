//! Dotmap - Extended associative containers
//!
//! This crate re-exports both layers of the Dotmap system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: dotmap_diff — Structural deep comparison, container adapter
//! Layer 0: dotmap_core — Core types (Value, Record, OrderedRecord),
//!          conversion, recursive sorting
//! ```

pub use dotmap_core as core;
pub use dotmap_diff as diff;
