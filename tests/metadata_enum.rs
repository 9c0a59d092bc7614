//! Integration tests for building metadata enums from schema JSON.

use metadata_enum::{Error, MetadataEnum, MetadataType};
use serde_json::json;

#[test]
fn test_colors_example() {
    let colors = MetadataEnum::from_options(&json!({
        "id": "colors",
        "enum": {
            "values": [
                {"name": "RED", "value": 0},
                {"name": "GREEN", "value": 1}
            ]
        }
    }))
    .unwrap();

    assert_eq!(colors.id(), "colors");
    assert_eq!(colors.values().len(), 2);
    assert_eq!(colors.names_by_value()[&0], "RED");
    assert_eq!(colors.values_by_name()["GREEN"], 1);
    assert_eq!(colors.value_type(), MetadataType::Uint16);
    assert_eq!(colors.name(), None);
    assert_eq!(colors.description(), None);
    assert!(colors.extras().is_none());
    assert!(colors.extensions().is_none());
}

#[test]
fn test_values_keep_input_order() {
    let json = json!({
        "values": [
            {"name": "C", "value": 7},
            {"name": "A", "value": -2},
            {"name": "B", "value": 3}
        ]
    });
    let metadata_enum = MetadataEnum::new("ordered", &json).unwrap();

    let names: Vec<_> =
        metadata_enum.values().iter().map(|value| value.name()).collect();
    assert_eq!(names, ["C", "A", "B"]);
    let values: Vec<_> =
        metadata_enum.values().iter().map(|value| value.value()).collect();
    assert_eq!(values, [7, -2, 3]);
}

#[test]
fn test_duplicate_value_last_name_wins() {
    let metadata_enum = MetadataEnum::new(
        "dupes",
        &json!({"values": [{"name": "A", "value": 0}, {"name": "B", "value": 0}]}),
    )
    .unwrap();

    assert_eq!(metadata_enum.names_by_value()[&0], "B");
    assert_eq!(metadata_enum.names_by_value().len(), 1);
    // Both names still resolve to the shared value.
    assert_eq!(metadata_enum.value_for_name("A"), Some(0));
    assert_eq!(metadata_enum.value_for_name("B"), Some(0));
    assert_eq!(metadata_enum.values().len(), 2);
}

#[test]
fn test_duplicate_name_last_value_wins() {
    let metadata_enum = MetadataEnum::new(
        "dupes",
        &json!({"values": [{"name": "A", "value": 0}, {"name": "A", "value": 5}]}),
    )
    .unwrap();

    assert_eq!(metadata_enum.values_by_name()["A"], 5);
    assert_eq!(metadata_enum.values_by_name().len(), 1);
    assert_eq!(metadata_enum.name_for_value(0), Some("A"));
    assert_eq!(metadata_enum.name_for_value(5), Some("A"));
}

#[test]
fn test_declared_value_types() {
    for value_type in MetadataType::ALL {
        let metadata_enum = MetadataEnum::new(
            "typed",
            &json!({"valueType": value_type.tag(), "values": []}),
        )
        .unwrap();
        assert_eq!(metadata_enum.value_type(), value_type);
    }
}

#[test]
fn test_unrecognized_value_type_defaults_to_uint16() {
    for tag in ["FLOAT32", "STRING", "int8", ""] {
        let metadata_enum = MetadataEnum::new(
            "typed",
            &json!({"valueType": tag, "values": []}),
        )
        .unwrap();
        assert_eq!(metadata_enum.value_type(), MetadataType::Uint16, "{}", tag);
    }
}

#[test]
fn test_optional_fields_are_preserved() {
    let metadata_enum = MetadataEnum::from_options(&json!({
        "id": "species",
        "enum": {
            "name": "Tree species",
            "description": "Species of a tree feature",
            "extras": {"source": "survey", "year": 2021},
            "extensions": {"EXT_example": {"flag": true}},
            "values": [
                {
                    "name": "OAK",
                    "value": 1,
                    "description": "Quercus",
                    "extras": "deciduous"
                }
            ]
        }
    }))
    .unwrap();

    assert_eq!(metadata_enum.name(), Some("Tree species"));
    assert_eq!(metadata_enum.description(), Some("Species of a tree feature"));
    assert_eq!(
        metadata_enum.extras(),
        Some(&json!({"source": "survey", "year": 2021}))
    );
    assert_eq!(
        metadata_enum.extensions(),
        Some(&json!({"EXT_example": {"flag": true}}))
    );

    let oak = &metadata_enum.values()[0];
    assert_eq!(oak.description(), Some("Quercus"));
    assert_eq!(oak.extras(), Some(&json!("deciduous")));
}

#[test]
fn test_missing_or_non_string_id() {
    let definition = json!({"values": []});
    for options in [
        json!({"enum": definition}),
        json!({"id": 7, "enum": definition}),
        json!({"id": null, "enum": definition}),
    ] {
        let error = MetadataEnum::from_options(&options).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument { .. }));
        assert_eq!(error.argument(), "options.id");
    }
}

#[test]
fn test_missing_or_non_object_definition() {
    for options in [
        json!({"id": "colors"}),
        json!({"id": "colors", "enum": "RED"}),
        json!({"id": "colors", "enum": [{"name": "RED", "value": 0}]}),
    ] {
        let error = MetadataEnum::from_options(&options).unwrap_err();
        assert_eq!(error.argument(), "options.enum");
    }

    let error = MetadataEnum::new("colors", &json!(null)).unwrap_err();
    assert_eq!(error.argument(), "options.enum");
}

#[test]
fn test_options_not_an_object() {
    let error = MetadataEnum::from_options(&json!("colors")).unwrap_err();
    assert_eq!(error.argument(), "options.id");
}

#[test]
fn test_parse_from_str() {
    let json = r#"{
        "valueType": "INT32",
        "values": [
            {"name": "NEGATIVE", "value": -1},
            {"name": "ZERO", "value": 0}
        ]
    }"#;
    let definition: serde_json::Value = serde_json::from_str(json).unwrap();
    let metadata_enum = MetadataEnum::new("sign", &definition).unwrap();

    assert_eq!(metadata_enum.value_type(), MetadataType::Int32);
    assert_eq!(metadata_enum.name_for_value(-1), Some("NEGATIVE"));
}

#[test]
fn test_uint64_enum_accepts_full_range() {
    let metadata_enum = MetadataEnum::new(
        "big",
        &json!({
            "valueType": "UINT64",
            "values": [
                {"name": "ZERO", "value": 0},
                {"name": "MAX", "value": u64::MAX}
            ]
        }),
    )
    .unwrap();

    assert_eq!(metadata_enum.value_type(), MetadataType::Uint64);
    let max = i128::from(u64::MAX);
    assert_eq!(metadata_enum.name_for_value(max), Some("MAX"));
    assert_eq!(metadata_enum.value_for_name("MAX"), Some(max));
    assert_eq!(metadata_enum.values()[1].value(), max);
}

#[test]
fn test_int64_enum_accepts_minimum() {
    let metadata_enum = MetadataEnum::new(
        "signed",
        &json!({"valueType": "INT64", "values": [{"name": "MIN", "value": i64::MIN}]}),
    )
    .unwrap();

    assert_eq!(metadata_enum.value_for_name("MIN"), Some(i128::from(i64::MIN)));
}
