use hubtags::attrdict::STRUCTURAL_MEMBERS;
use hubtags::{AttributeDictionary, GeneralTags, LookupError, TagCatalog};
use pretty_assertions::assert_eq;

// Shape of the hub's /api/*-tags-by-type responses.
const TAG_CATALOG: &str = r#"{
    "languages": [
        {"id": "itemA", "label": "Item A"},
        {"id": "itemB", "label": "Item B"}
    ],
    "license": [
        {"id": "itemC", "label": "Item C"},
        {"id": "itemD", "label": "Item D"}
    ]
}"#;

fn catalog() -> TagCatalog {
    TagCatalog::from_json_str(TAG_CATALOG).unwrap()
}

fn ids(entries: [(&str, &str); 2]) -> AttributeDictionary<String> {
    entries
        .into_iter()
        .map(|(name, id)| (name, id.to_string()))
        .collect()
}

#[test]
fn test_adding_item() {
    let mut dict = AttributeDictionary::new();
    dict.set_key("itemA", 2);
    assert_eq!(dict.by_name("itemA"), Ok(&2));
    assert_eq!(dict.by_key("itemA"), Ok(&2));

    dict.set_name("itemB", 3).unwrap();
    assert_eq!(dict.by_name("itemB"), Ok(&3));
    assert_eq!(dict.by_key("itemB"), Ok(&3));
}

#[test]
fn test_removing_item() {
    let mut dict = AttributeDictionary::new();
    dict.set_key("itemA", 2);
    dict.set_name("itemB", 3).unwrap();

    dict.delete_name("itemA").unwrap();
    assert_eq!(dict.by_key("itemA"), Err(LookupError::key_not_found("itemA")));

    dict.delete_key("itemB").unwrap();
    assert_eq!(
        dict.by_name("itemB"),
        Err(LookupError::attribute_not_found("itemB"))
    );
    assert!(dict.is_empty());
}

#[test]
fn test_members() {
    let mut dict = AttributeDictionary::new();
    dict.set_key("itemA", 2);
    dict.set_name("itemB", 3).unwrap();

    let mut expected: Vec<String> = STRUCTURAL_MEMBERS.iter().map(|m| m.to_string()).collect();
    expected.extend(["itemA".to_string(), "itemB".to_string()]);
    expected.sort();

    assert_eq!(dict.members(), expected);
}

#[test]
fn test_render() {
    let mut dict = AttributeDictionary::new();
    dict.set_key("itemA", 2);
    dict.set_name("itemB", 3).unwrap();

    assert_eq!(dict.render(), "Available Attributes:\n * itemA\n * itemB\n");
}

#[test]
fn test_general_tags_init() {
    let tags = GeneralTags::new(&catalog(), None);

    assert!(["languages", "license"]
        .iter()
        .all(|kind| tags.contains_category(kind)));
    assert_eq!(
        tags.category("languages").unwrap(),
        &ids([("ItemA", "itemA"), ("ItemB", "itemB")])
    );
    assert_eq!(
        tags.category("license").unwrap(),
        &ids([("ItemC", "itemC"), ("ItemD", "itemD")])
    );
}

#[test]
fn test_general_tags_filter() {
    let tags = GeneralTags::new(&catalog(), Some(&["license"]));

    assert!(tags.contains_category("license"));
    assert!(tags.category("languages").unwrap_err().is_attribute_not_found());
    assert_eq!(
        tags.category("license").unwrap(),
        &ids([("ItemC", "itemC"), ("ItemD", "itemD")])
    );
}

#[test]
fn test_general_tags_category_set_matches_input() {
    let raw = catalog();
    let tags = GeneralTags::new(&raw, None);
    assert_eq!(
        tags.categories().collect::<Vec<_>>(),
        raw.categories().collect::<Vec<_>>()
    );
}

#[test]
fn test_tag_lookup_modes_inside_category() {
    let tags = GeneralTags::new(&catalog(), None);
    let languages = tags.category("languages").unwrap();

    assert_eq!(languages.by_name("ItemA").unwrap(), "itemA");
    assert!(languages.by_name("ItemZ").unwrap_err().is_attribute_not_found());
    assert!(languages.by_key("ItemZ").unwrap_err().is_key_not_found());
}

#[test]
fn test_general_tags_keep_input_category_order() {
    let raw = TagCatalog::from_json_str(
        r#"{
            "license": [{"id": "itemC", "label": "Item C"}],
            "languages": [{"id": "itemA", "label": "Item A"}]
        }"#,
    )
    .unwrap();

    let tags = GeneralTags::new(&raw, None);
    assert_eq!(tags.render(), "Available Attributes:\n * license\n * languages\n");

    let filtered = GeneralTags::new(&raw, Some(&["languages", "license"]));
    assert_eq!(
        filtered.categories().collect::<Vec<_>>(),
        vec!["languages", "license"]
    );
}
