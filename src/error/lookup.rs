use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },

    #[error("no attribute named '{name}'")]
    AttributeNotFound { name: String },

    #[error("'{name}' is not a valid attribute name")]
    InvalidAttributeName { name: String },
}

impl LookupError {
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn attribute_not_found(name: impl Into<String>) -> Self {
        Self::AttributeNotFound { name: name.into() }
    }

    pub fn invalid_attribute_name(name: impl Into<String>) -> Self {
        Self::InvalidAttributeName { name: name.into() }
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    pub fn is_attribute_not_found(&self) -> bool {
        matches!(self, Self::AttributeNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_display() {
        let err = LookupError::key_not_found("itemA");
        assert_eq!(err.to_string(), "key not found: 'itemA'");
        assert!(err.is_key_not_found());
        assert!(!err.is_attribute_not_found());
    }

    #[test]
    fn test_attribute_not_found_display() {
        let err = LookupError::attribute_not_found("languages");
        assert_eq!(err.to_string(), "no attribute named 'languages'");
        assert!(err.is_attribute_not_found());
    }

    #[test]
    fn test_invalid_attribute_name_display() {
        let err = LookupError::invalid_attribute_name("item a");
        assert_eq!(err.to_string(), "'item a' is not a valid attribute name");
    }
}
