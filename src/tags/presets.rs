use clap::ValueEnum;
use std::ops::Deref;

use super::catalog::TagCatalog;
use super::general::GeneralTags;

pub const MODEL_CATEGORIES: &[&str] = &[
    "library",
    "language",
    "license",
    "dataset",
    "pipeline_tag",
];

pub const DATASET_CATEGORIES: &[&str] = &[
    "language",
    "multilinguality",
    "language_creators",
    "task_categories",
    "size_categories",
    "benchmark",
    "task_ids",
    "license",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TagKind {
    General,
    Model,
    Dataset,
}

impl TagKind {
    /// Categories retained for this kind; `None` keeps every category.
    pub fn category_filter(&self) -> Option<&'static [&'static str]> {
        match self {
            TagKind::General => None,
            TagKind::Model => Some(MODEL_CATEGORIES),
            TagKind::Dataset => Some(DATASET_CATEGORIES),
        }
    }

    pub fn build(&self, catalog: &TagCatalog) -> GeneralTags {
        GeneralTags::new(catalog, self.category_filter())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::General => "general",
            TagKind::Model => "model",
            TagKind::Dataset => "dataset",
        }
    }
}

/// Tags that can be used to filter models on the hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTags(GeneralTags);

impl ModelTags {
    pub fn new(catalog: &TagCatalog) -> Self {
        Self(TagKind::Model.build(catalog))
    }

    pub fn into_inner(self) -> GeneralTags {
        self.0
    }
}

impl Deref for ModelTags {
    type Target = GeneralTags;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Tags that can be used to filter datasets on the hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetTags(GeneralTags);

impl DatasetTags {
    pub fn new(catalog: &TagCatalog) -> Self {
        Self(TagKind::Dataset.build(catalog))
    }

    pub fn into_inner(self) -> GeneralTags {
        self.0
    }
}

impl Deref for DatasetTags {
    type Target = GeneralTags;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
