/// Returns true when `name` can be used through the attribute view: non-empty,
/// starts with an ASCII letter or `_`, continues with ASCII alphanumerics or `_`.
pub fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
