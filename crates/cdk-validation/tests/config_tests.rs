//! Loading validator options from property rule documents.

use cdk_validation::{
    validate_number_range, validate_object_attributes, validate_reg_exp, validate_string_length,
    AttributeOptions, LengthMode, NumberRangeOptions, Pattern, PatternOptions, StringLengthOptions,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRules {
    props: AttributeOptions,
    name_length: StringLengthOptions,
    name_pattern: Pattern,
    #[serde(default)]
    name_pattern_options: PatternOptions,
    memory_size: NumberRangeOptions,
    #[serde(default)]
    length_mode: LengthMode,
}

const RULES: &str = r#"
props:
  mandatoryAttributes: [functionName, memorySize]
  optionalAttributes: [description]
  messagePrefix: "FunctionProps: "
nameLength:
  min: 1
  max: 64
  messagePrefix: "functionName: "
namePattern: "/^[a-zA-Z0-9_-]+$/"
namePatternOptions:
  message: "may only contain letters, digits, hyphens and underscores"
memorySize:
  min: 128
  max: 10240
  message: "must be between 128 and 10240 MB"
"#;

fn rules() -> PropertyRules {
    serde_yaml::from_str(RULES).expect("rules document parses")
}

#[test]
fn loads_rules_from_yaml() {
    let rules = rules();

    assert_eq!(rules.props.mandatory_attributes, vec!["functionName", "memorySize"]);
    assert_eq!(rules.props.optional_attributes, vec!["description"]);
    assert_eq!(rules.name_length.min, Some(1));
    assert_eq!(rules.name_length.max, Some(64));
    assert_eq!(rules.name_pattern.to_string(), "/^[a-zA-Z0-9_-]+$/");
    assert_eq!(rules.memory_size.min, Some(128.0));
    assert_eq!(rules.length_mode, LengthMode::Utf16);
}

#[test]
fn loaded_rules_validate_props() {
    let rules = rules();
    let props = serde_json::json!({ "functionName": "my function", "timeout": 3 });
    let name = props["functionName"].as_str().unwrap();

    let mut report = validate_object_attributes(&props, &rules.props);
    report.extend(validate_string_length(name, &rules.name_length).unwrap());
    report.extend(validate_reg_exp(name, &rules.name_pattern, &rules.name_pattern_options));
    report.extend(validate_number_range(64.0, &rules.memory_size).unwrap());

    assert_eq!(
        report,
        vec![
            "FunctionProps: missing mandatory attribute: memorySize",
            "FunctionProps: contains unknown attribute: timeout",
            "may only contain letters, digits, hyphens and underscores",
            "must be between 128 and 10240 MB",
        ]
    );
}

#[test]
fn inverted_bounds_in_document_surface_on_use() {
    let options: StringLengthOptions = serde_yaml::from_str("min: 10\nmax: 2\n").unwrap();
    let error = validate_string_length("abc", &options).unwrap_err();
    assert!(error.is_inverted_bounds());
}

#[test]
fn malformed_pattern_literal_fails_to_load() {
    let result: Result<Pattern, _> = serde_yaml::from_str("\"^[0-9]+$\"");
    assert!(result.is_err());
}

#[test]
fn options_roundtrip_through_json() {
    let options = NumberRangeOptions::new().range(1.5, 2.5).message_prefix("ratio: ");
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"min":1.5,"max":2.5,"messagePrefix":"ratio: "}"#);

    let back: NumberRangeOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}
