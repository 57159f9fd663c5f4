//! # Error Type Tests
//!
//! Tests for error construction and display formatting.

use bpsim_core::common::error::PredictorError;

#[test]
fn test_size_mismatch_display() {
    let err = PredictorError::SizeMismatch {
        expected: 4,
        actual: 2,
    };
    assert_eq!(err.to_string(), "register holds 4 bits but was given 2");
}

#[test]
fn test_invalid_configuration_display() {
    let err = PredictorError::InvalidConfiguration("counter width must be at least one bit".into());
    assert_eq!(
        err.to_string(),
        "invalid configuration: counter width must be at least one bit"
    );
}

#[test]
fn test_key_not_found_display() {
    let err = PredictorError::KeyNotFound("0101".into());
    assert_eq!(err.to_string(), "no table entry for key 0101");
}

#[test]
fn test_malformed_config_from_serde_json() {
    let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = PredictorError::from(parse_err);
    assert!(matches!(err, PredictorError::MalformedConfig(_)));
    assert!(err.to_string().starts_with("malformed configuration:"));
}
