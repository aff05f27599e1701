//! Unit tests for domain error types

use decor_domain::Error;

#[test]
fn test_creation_error_lists_reasons() {
    let error = Error::creation(
        "RangeValidator",
        vec![
            "(min: integer, max: integer) missing [max]".to_string(),
            "(min: integer) missing [min]".to_string(),
        ],
    );

    let display = error.to_string();
    assert!(display.contains("RangeValidator"));
    assert!(display.contains("missing [max]"));
    assert!(display.contains("; "));
    assert!(error.is_creation_failure());
}

#[test]
fn test_unknown_component_type_is_creation_failure() {
    let error = Error::unknown_component_type("MissingValidator", "Constraint");
    match &error {
        Error::UnknownComponentType {
            type_name,
            tag_kind,
        } => {
            assert_eq!(type_name, "MissingValidator");
            assert_eq!(tag_kind, "Constraint");
        }
        _ => panic!("Expected UnknownComponentType error"),
    }
    assert!(error.is_creation_failure());
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("bad input");
    match &error {
        Error::InvalidArgument { message } => assert_eq!(message, "bad input"),
        _ => panic!("Expected InvalidArgument error"),
    }
    assert!(!error.is_creation_failure());
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("catalog unreadable", io);
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "catalog unreadable");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_json_error_conversion() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let error: Error = parse.unwrap_err().into();
    assert!(matches!(error, Error::Json { .. }));
}
