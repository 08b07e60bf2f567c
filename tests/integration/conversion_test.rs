use std::io::Write;

use cim10_claml::{ConverterConfig, DiagnosisCatalog, convert_file, to_json_string};

use crate::utils::{FIXTURE, codes_with_prefix, convert_fixture, label_of, test_config};

#[test]
fn test_cholera_scenario() {
    let catalog = convert_fixture();

    assert_eq!(label_of(&catalog, "A00"), "Cholera");
    assert_eq!(label_of(&catalog, "A000"), "Cholera, due to Vibrio cholerae");
    assert_eq!(label_of(&catalog, "A001"), "Cholera, due to Vibrio cholerae eltor");
    assert_eq!(codes_with_prefix(&catalog, "A00"), vec!["A00", "A000", "A001"]);
}

#[test]
fn test_category_without_modifiers_yields_one_definition() {
    let catalog = convert_fixture();

    assert_eq!(codes_with_prefix(&catalog, "Z00"), vec!["Z00"]);
    assert_eq!(label_of(&catalog, "Z00"), "General examination");
}

#[test]
fn test_full_fixture_output() {
    let catalog = convert_fixture();

    let codes: Vec<_> = catalog
        .definitions()
        .iter()
        .map(|definition| definition.code.as_str())
        .collect();
    assert_eq!(
        codes,
        vec![
            "A00", "A000", "A001", "A01", "A010", "A0100", "M00", "M001", "M0010", "M0010L",
            "M0010R", "M001L", "M001L0", "M001L1", "M001R", "M001R0", "M001R1", "M00L", "M00L0",
            "M00L1", "M00R", "M00R0", "M00R1", "Z00",
        ]
    );
    assert_eq!(catalog.diagnoses.title, "CIM-10");
}

#[test]
fn test_groups_nest_in_resolution_order() {
    let catalog = convert_fixture();

    // S02 is declared on M00 itself, S01 on its block: the category comes first
    assert_eq!(label_of(&catalog, "M00L"), "Pyogenic arthritis, left");
    assert_eq!(label_of(&catalog, "M00R1"), "Pyogenic arthritis, right, site b");
    assert!(catalog.find("M000").is_none());
    assert!(catalog.find("M000L").is_none());
}

#[test]
fn test_placeholder_suffix_is_never_generated() {
    let catalog = convert_fixture();

    assert!(
        catalog
            .definitions()
            .iter()
            .all(|definition| !definition.label.contains("site unspecified"))
    );
    assert!(catalog.find("M00L9").is_none());
}

#[test]
fn test_ancestor_exclusion_applies_to_descendants_only() {
    let catalog = convert_fixture();

    // M00.1 excludes S01: it keeps the group itself
    assert_eq!(
        label_of(&catalog, "M001L0"),
        "Pneumococcal arthritis, left, site a"
    );

    // its child loses it, the ancestor keeps it
    assert_eq!(codes_with_prefix(&catalog, "M0010"), vec!["M0010", "M0010L", "M0010R"]);
    assert_eq!(
        label_of(&catalog, "M0010R"),
        "Pneumococcal arthritis, multiple sites, right"
    );
    assert!(catalog.find("M00L0").is_some());
}

#[test]
fn test_later_generation_overwrites_earlier() {
    let catalog = convert_fixture();

    // A01 expands to A010 first, then category A01.0 is declared
    assert_eq!(label_of(&catalog, "A010"), "Typhoid fever");
    assert_eq!(label_of(&catalog, "A0100"), "Typhoid fever, typhoid");

    // Declaring the subcategory first lets the expansion win instead
    let a01 = FIXTURE.find(r#"<Class code="A01" "#).unwrap();
    let a010 = FIXTURE.find(r#"<Class code="A01.0" "#).unwrap();
    let xiii = FIXTURE.find(r#"<Class code="XIII" "#).unwrap();
    let reordered = format!(
        "{}{}{}{}",
        &FIXTURE[..a01],
        &FIXTURE[a010..xiii],
        &FIXTURE[a01..a010],
        &FIXTURE[xiii..]
    );
    let catalog = cim10_claml::convert_str(&reordered, &test_config()).unwrap();
    assert_eq!(label_of(&catalog, "A010"), "Typhoid and paratyphoid fevers, typhoid");
}

#[test]
fn test_overwrites_are_counted() {
    let document = crate::utils::fixture_document();
    let (_, stats) = cim10_claml::convert(&document, &test_config()).unwrap();

    assert_eq!(stats.categories, 7);
    assert_eq!(stats.classes, 11);
    assert_eq!(stats.modifier_groups, 4);
    assert_eq!(stats.definitions, 24);
    assert_eq!(stats.overwrites, 1);
    assert_eq!(stats.conflicting_overwrites, 1);
}

#[test]
fn test_output_is_sorted_by_code_bytes() {
    let catalog = convert_fixture();

    assert!(
        catalog
            .definitions()
            .windows(2)
            .all(|pair| pair[0].code.as_bytes() <= pair[1].code.as_bytes())
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let first = to_json_string(&convert_fixture(), 4).unwrap();
    let second = to_json_string(&convert_fixture(), 4).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_json_round_trips_through_envelope() {
    let catalog = convert_fixture();
    let json = to_json_string(&catalog, 4).unwrap();

    let decoded: DiagnosisCatalog = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, catalog);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["diagnoses"]["definitions"][0]["code"], "A00");
}

#[test]
fn test_convert_file_reads_configured_path() {
    let path = std::env::temp_dir().join(format!("cim10-claml-{}.xml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    drop(file);

    let config = ConverterConfig::new()
        .with_input_path(&path)
        .with_title("CIM-10 test");
    let catalog = convert_file(&config);
    std::fs::remove_file(&path).unwrap();

    let catalog = catalog.unwrap();
    assert_eq!(catalog.diagnoses.title, "CIM-10 test");
    assert_eq!(catalog.definitions().len(), 24);
}

#[test]
fn test_custom_separator_and_indent() {
    let config = ConverterConfig::new().with_separator('_').with_indent(2);
    let catalog = cim10_claml::convert_str(FIXTURE, &config).unwrap();

    // Dots are kept when another separator is configured
    assert_eq!(label_of(&catalog, "M00.1"), "Pneumococcal arthritis");
    assert_eq!(label_of(&catalog, "M00.1L.0"), "Pneumococcal arthritis, left, site a");
    assert!(catalog.find("M001").is_none());

    let json = to_json_string(&catalog, config.indent).unwrap();
    assert!(json.starts_with("{\n  \"diagnoses\": {\n    \"title\""));
}
