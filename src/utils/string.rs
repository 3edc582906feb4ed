/// Turns a human-readable tag label into an attribute-style name: split on
/// whitespace, upper-case the first character of each word, join without a
/// separator. The rest of each word is kept as-is.
pub fn normalize_label(label: &str) -> String {
    label.split_whitespace().map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_two_words() {
        assert_eq!(normalize_label("Item A"), "ItemA");
    }

    #[test]
    fn test_normalize_capitalizes_lowercase_words() {
        assert_eq!(normalize_label("text classification"), "TextClassification");
    }

    #[test]
    fn test_normalize_keeps_inner_case() {
        assert_eq!(normalize_label("pyTorch model"), "PyTorchModel");
        assert_eq!(normalize_label("MIT"), "MIT");
    }

    #[test]
    fn test_normalize_collapses_any_whitespace() {
        assert_eq!(normalize_label("  item\tA \n b "), "ItemAB");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize_label("apache 2.0"), "Apache2.0");
        assert_eq!(normalize_label("en"), "En");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("   "), "");
    }
}
