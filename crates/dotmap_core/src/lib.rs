//! Core value model and extended containers for Dotmap.
//!
//! This crate provides:
//! - [`Value`] - The closed value model for nested in-memory data
//! - [`Record`] / [`OrderedRecord`] - Extended mappings with field-style access
//! - [`convert`] - Recursive normalization into the container family
//! - [`Sorter`] - Recursive, exclusion-aware sorting
//! - [`Error`] - Categorized error types
//! - Collections with non-mutating APIs ([`DmVec`], [`DmSet`], [`DmMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod convert;
mod error;
mod kind;
mod ordered;
mod record;
pub mod sort;
mod value;

pub use collections::{DmMap, DmSet, DmVec};
pub use convert::{Target, convert};
pub use error::{Error, ErrorKind, Result};
pub use kind::{Kind, Shape};
pub use ordered::OrderedRecord;
pub use record::Record;
pub use sort::{Sorter, sort};
pub use value::Value;
