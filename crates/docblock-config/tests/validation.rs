//! Tests for settings validation.

use docblock_config::{validate, ConfigError, NotationRule, Settings};

#[test]
fn defaults_are_valid() {
    validate(&Settings::default()).unwrap();
}

#[test]
fn return_tag_must_be_a_tag() {
    let mut settings = Settings::default();
    settings.return_tag = "returns".to_string();

    let err = validate(&settings).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "returnTag"));

    settings.return_tag = "  ".to_string();
    assert!(validate(&settings).is_err());
}

#[test]
fn indentation_is_bounded() {
    let mut settings = Settings::default();
    settings.indentation_spaces = 40;
    assert!(validate(&settings).is_err());
}

#[test]
fn override_js_var_must_be_one_word() {
    let mut settings = Settings::default();
    settings.override_js_var = Some("my var".to_string());
    assert!(validate(&settings).is_err());

    settings.override_js_var = Some("var".to_string());
    validate(&settings).unwrap();
}

#[test]
fn invalid_notation_pattern_is_reported() {
    let mut settings = Settings::default();
    settings
        .notation_map
        .push(NotationRule::pattern("[a-").with_type("Broken"));

    match validate(&settings).unwrap_err() {
        ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[a-"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn prefix_rules_are_not_compiled() {
    let mut settings = Settings::default();
    settings.notation_map.push(NotationRule::prefix("[a-"));
    validate(&settings).unwrap();
}
