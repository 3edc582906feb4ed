mod catalog;
mod general;
mod presets;

pub use catalog::{TagCatalog, TagRecord};
pub use general::{GeneralTags, GENERAL_TAGS_MEMBERS};
pub use presets::{DatasetTags, ModelTags, TagKind, DATASET_CATEGORIES, MODEL_CATEGORIES};
