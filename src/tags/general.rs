use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace};

use super::catalog::{TagCatalog, TagRecord};
use crate::attrdict::AttributeDictionary;
use crate::error::LookupError;
use crate::utils::normalize_label;

/// Public operations of [`GeneralTags`], reported by [`GeneralTags::members`].
pub const GENERAL_TAGS_MEMBERS: &[&str] = &[
    "by_key",
    "categories",
    "category",
    "contains_category",
    "is_empty",
    "iter",
    "len",
    "members",
    "new",
    "render",
];

/// Per-category index over a [`TagCatalog`]. Each retained category maps the
/// normalized label of its tags to the tag id.
///
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneralTags {
    categories: AttributeDictionary<AttributeDictionary<String>>,
}

impl GeneralTags {
    /// Builds the index. Without `keys`, every category is kept in catalog
    /// order. With `keys`, only the listed categories are kept, in the order
    /// they are listed; names missing from the catalog are skipped.
    pub fn new(catalog: &TagCatalog, keys: Option<&[&str]>) -> Self {
        let mut categories = AttributeDictionary::new();
        match keys {
            None => {
                for (name, records) in catalog.iter() {
                    categories.set_key(name, Self::build_category(records));
                }
            }
            Some(keys) => {
                for &name in keys {
                    match catalog.get(name) {
                        Some(records) => {
                            categories.set_key(name, Self::build_category(records));
                        }
                        None => debug!(category = %name, "requested category not in catalog"),
                    }
                }
                trace!(
                    dropped = catalog.len().saturating_sub(categories.len()),
                    "categories filtered out"
                );
            }
        }

        debug!(categories = categories.len(), "built tag index");
        Self { categories }
    }

    fn build_category(records: &[TagRecord]) -> AttributeDictionary<String> {
        records
            .iter()
            .map(|record| (normalize_label(&record.label), record.id.clone()))
            .collect()
    }

    /// Attribute-style category access; filtered-out and unknown categories
    /// both report [`LookupError::AttributeNotFound`]. Categories whose name is
    /// not a valid attribute name are only reachable through [`Self::by_key`].
    pub fn category(&self, name: &str) -> Result<&AttributeDictionary<String>, LookupError> {
        self.categories.by_name(name)
    }

    pub fn by_key(&self, name: &str) -> Result<&AttributeDictionary<String>, LookupError> {
        self.categories.by_key(name)
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeDictionary<String>)> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn members(&self) -> Vec<String> {
        let mut members: BTreeSet<&str> = GENERAL_TAGS_MEMBERS.iter().copied().collect();
        members.extend(self.categories());
        members.into_iter().map(str::to_string).collect()
    }

    pub fn render(&self) -> String {
        self.categories.render()
    }
}

impl fmt::Display for GeneralTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.categories, f)
    }
}
