//! Hub Tags
//!
//! Attribute-style dictionaries and per-category tag indexes built from the
//! tag catalogs a hub client fetches (`category -> [{id, label}]`).

pub mod attrdict;
pub mod cli;
pub mod error;
pub mod logging;
pub mod tags;
pub mod utils;

pub use attrdict::AttributeDictionary;
pub use error::{Error, LookupError, Result};
pub use tags::{DatasetTags, GeneralTags, ModelTags, TagCatalog, TagKind, TagRecord};
