//! Unit tests for the built-in formatters

use decor_application::domain_services::{ConstructorResolver, SupplierContext};
use decor_providers::Formatter;
use decor_providers::formatters::{CaseFormatter, DecimalFormatter};
use serde_json::json;

#[test]
fn test_decimal_format_and_parse() {
    let decimal = DecimalFormatter::new(2);
    assert_eq!(decimal.format(&json!(3.14159)).expect("number"), "3.14");
    assert_eq!(decimal.format(&json!(7)).expect("number"), "7.00");
    assert_eq!(decimal.parse(" 2.50 ").expect("parses"), json!(2.5));
}

#[test]
fn test_decimal_rejects_non_numbers() {
    let decimal = DecimalFormatter::new(0);
    assert!(decimal.format(&json!("3")).is_err());
    assert!(decimal.parse("three").is_err());
}

#[test]
fn test_decimal_descriptor_needs_scale() {
    let err = ConstructorResolver::new()
        .resolve(&DecimalFormatter::descriptor(), &SupplierContext::new())
        .expect_err("scale is unsupplied");
    assert!(err.is_creation_failure());
    assert!(err.to_string().contains("scale"));
}

#[test]
fn test_case_formatter() {
    let upper = CaseFormatter::upper();
    let lower = CaseFormatter::lower();
    assert_eq!(upper.format(&json!("Mixed")).expect("text"), "MIXED");
    assert_eq!(lower.format(&json!("Mixed")).expect("text"), "mixed");
    assert_eq!(upper.parse("abc").expect("text"), json!("ABC"));
    assert!(upper.format(&json!(1)).is_err());
}

#[test]
fn test_case_descriptor_reads_upper_flag() {
    let context = SupplierContext::new().supply_value("upper", false);
    let formatter = ConstructorResolver::new()
        .resolve(&CaseFormatter::descriptor(), &context)
        .expect("satisfiable")
        .instantiate()
        .expect("instantiates");
    assert_eq!(formatter.format(&json!("ABC")).expect("text"), "abc");
}
