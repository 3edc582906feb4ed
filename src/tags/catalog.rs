use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::attrdict::AttributeDictionary;
use crate::error::{CatalogError, IoError, Result};

/// One selectable value within a category, as returned by the hub's
/// tags-by-type endpoints. Fields beyond `id` and `label` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: String,
    pub label: String,
}

impl TagRecord {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Raw tag data: category name to the ordered records of that category.
/// Categories keep the order they were read or inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    categories: AttributeDictionary<Vec<TagRecord>>,
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the records of `category`, returning the previous ones.
    /// A replaced category keeps its position.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        records: Vec<TagRecord>,
    ) -> Option<Vec<TagRecord>> {
        self.categories.set_key(category, records)
    }

    pub fn get(&self, category: &str) -> Option<&[TagRecord]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TagRecord])> {
        self.categories
            .iter()
            .map(|(name, records)| (name, records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, CatalogError> {
        serde_json::from_str(content)
            .map_err(|e| CatalogError::parse_error("<json>", e.to_string()))
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, CatalogError> {
        serde_yaml::from_str(content)
            .map_err(|e| CatalogError::parse_error("<yaml>", e.to_string()))
    }

    /// Reads a catalog file, choosing the parser from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading tag catalog");

        let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let catalog: Self = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| CatalogError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| CatalogError::parse_error(path, e.to_string()))?,
            _ => return Err(CatalogError::unsupported_format(extension).into()),
        };

        debug!(
            categories = catalog.len(),
            records = catalog.record_count(),
            "loaded tag catalog"
        );
        Ok(catalog)
    }

    pub fn record_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<TagRecord>)> for TagCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Vec<TagRecord>)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}
