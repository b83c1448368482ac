mod common;

use common::{assert_components, init_tracing, seeded_generator};
use keymint_activation::{ActivationKeyError, ActivationKeyProperties, KeyShapeConfig};
use pretty_assertions::assert_eq;

#[test]
fn default_config_matches_default_properties() {
    let config = KeyShapeConfig::default();
    assert_eq!(config.separator, '-');
    assert_eq!(config.component_length, 4);
    assert_eq!(config.component_count, 4);
    assert_eq!(config.prefix_length, 4);
    assert_eq!(config.number_to_number_map, "5806924137");
    assert_eq!(config.number_to_letter_map, "KXRMWTHPZC");

    let properties = ActivationKeyProperties::try_from(config).unwrap();
    assert_eq!(properties, ActivationKeyProperties::default());
}

#[test]
fn empty_document_uses_defaults() {
    let properties = ActivationKeyProperties::from_json("{}").unwrap();
    assert_eq!(properties, ActivationKeyProperties::default());
}

#[test]
fn partial_document_overrides_fields() {
    init_tracing();
    let properties =
        ActivationKeyProperties::from_json(r#"{"component_count": 5, "prefix_length": 0}"#)
            .unwrap();
    assert_eq!(properties.component_count(), 5);
    assert_eq!(properties.component_length(), 4);
    assert!(!properties.use_prefix());
}

#[test]
fn custom_maps_are_applied() {
    let json = r#"{
        "separator": ":",
        "component_length": 3,
        "component_count": 3,
        "prefix_length": 0,
        "number_to_number_map": "0123456789",
        "number_to_letter_map": "ABCDEFGHJK"
    }"#;
    let properties = ActivationKeyProperties::from_json(json).unwrap();
    assert_eq!(properties.component_separator(), ':');
    assert_eq!(properties.number_to_letter_map().get('9'), Some('K'));
    assert_eq!(properties.number_to_number_map().get('4'), Some('4'));

    let mut generator = seeded_generator(&properties, 6);
    let key = generator.create_activation_key(None).unwrap();
    assert_components(key.value(), ':', 3, 3);
}

#[test]
fn config_roundtrip_through_json() {
    let mut properties = ActivationKeyProperties::with_prefix('~', 5, 6, 2).unwrap();
    properties
        .change_number_to_letter_map(
            &keymint_activation::CharacterMap::from_digit_string("QWERTYUIOP").unwrap(),
        )
        .unwrap();

    let json = KeyShapeConfig::from(&properties).to_json().unwrap();
    let restored = ActivationKeyProperties::from_json(&json).unwrap();
    assert_eq!(restored, properties);
}

#[test]
fn malformed_json_is_serialization_error() {
    let err = ActivationKeyProperties::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ActivationKeyError::Serialization(_)));
}

#[test]
fn invalid_shape_is_range_error() {
    let err = ActivationKeyProperties::from_json(r#"{"component_length": 9}"#).unwrap_err();
    assert!(err.is_range_error());
}

#[test]
fn whitespace_separator_is_argument_error() {
    let err = ActivationKeyProperties::from_json(r#"{"separator": " "}"#).unwrap_err();
    assert!(err.is_argument_error());
}

#[test]
fn short_map_string_is_argument_error() {
    let err =
        ActivationKeyProperties::from_json(r#"{"number_to_number_map": "123"}"#).unwrap_err();
    assert!(err.is_argument_error());
}

#[test]
fn letter_in_number_map_is_argument_error() {
    let err = ActivationKeyProperties::from_json(r#"{"number_to_number_map": "012345678X"}"#)
        .unwrap_err();
    assert!(err.is_argument_error());
}

#[test]
fn constant_number_map_string_is_argument_error() {
    let err = ActivationKeyProperties::from_json(r#"{"number_to_number_map": "0000000000"}"#)
        .unwrap_err();
    assert!(err.is_argument_error());
}

#[test]
fn repeated_letter_in_letter_map_string_is_argument_error() {
    let err = ActivationKeyProperties::from_json(r#"{"number_to_letter_map": "ABCDEFGHIA"}"#)
        .unwrap_err();
    assert!(err.is_argument_error());
}
