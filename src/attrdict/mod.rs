//! Mapping with a synchronized attribute view.
//!
//! [`AttributeDictionary`] stores string keys in insertion order and exposes
//! them through two access modes that share one backing store:
//!
//! - key-style (`by_key`, `set_key`, `delete_key`) accepts any key and reports
//!   absence as [`LookupError::KeyNotFound`];
//! - name-style (`by_name`, `set_name`, `delete_name`) only reaches keys that
//!   are valid attribute names and reports absence as
//!   [`LookupError::AttributeNotFound`].

mod dictionary;
mod names;

pub use dictionary::{AttributeDictionary, STRUCTURAL_MEMBERS};
pub use names::is_attribute_name;

pub use crate::error::LookupError;
