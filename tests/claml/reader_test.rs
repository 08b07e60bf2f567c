use cim10_claml::models::ClassKind;

use crate::utils::fixture_document;

#[test]
fn test_fixture_document_contents() {
    let document = fixture_document();

    assert_eq!(document.modifiers, vec!["0", "S01", "S02", "S03"]);
    assert_eq!(document.modifier_classes.len(), 8);
    assert_eq!(document.classes.len(), 11);
    assert_eq!(document.categories().count(), 7);
}

#[test]
fn test_class_kinds_and_hierarchy() {
    let document = fixture_document();

    let chapter = &document.classes[0];
    assert_eq!(chapter.code, "I");
    assert_eq!(chapter.kind, ClassKind::Chapter);
    assert_eq!(chapter.superclass, None);

    let block = &document.classes[1];
    assert_eq!(block.kind, ClassKind::Block);
    assert_eq!(block.superclass.as_deref(), Some("I"));

    let subcategory = document
        .classes
        .iter()
        .find(|class| class.code == "M00.1")
        .unwrap();
    assert_eq!(subcategory.superclass.as_deref(), Some("M00"));
    assert_eq!(subcategory.excluded_modifiers, vec!["S01"]);
    assert!(subcategory.modified_by.is_empty());
    assert_eq!(subcategory.normalized_code('.'), "M001");
}

#[test]
fn test_modifier_classes_keep_raw_codes() {
    let document = fixture_document();

    let codes: Vec<_> = document
        .modifier_classes
        .iter()
        .filter(|class| class.modifier == "S01")
        .map(|class| class.code.as_str())
        .collect();
    assert_eq!(codes, vec![".0", ".1", ".9 "]);
}

#[test]
fn test_language_tagged_label() {
    let document = fixture_document();

    assert_eq!(
        document.modifier_classes[0].label.as_deref(),
        Some("due to Vibrio cholerae")
    );
}
