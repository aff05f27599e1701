//! Tests for supplier contexts

use decor_application::domain_services::{SupplierContext, SupplierRule, predicates};
use decor_domain::value_objects::{ParamDescriptor, ParamType, Supplied};
use serde_json::json;

fn param(name: &str, ty: ParamType) -> ParamDescriptor {
    ParamDescriptor::new(0, name, ty)
}

fn value_of(supplied: Option<Supplied>) -> Option<serde_json::Value> {
    supplied.and_then(|s| s.as_value().cloned())
}

#[test]
fn test_empty_context_supplies_nothing() {
    let context = SupplierContext::new();
    assert!(context.resolve(&param("min", ParamType::Integer)).is_none());
    assert!(context.is_empty());
    assert!(!context.has_fallback());
}

#[test]
fn test_first_matching_rule_wins() {
    let mut context = SupplierContext::new();
    context
        .use_supplier(|_| Supplied::Value(json!(1)))
        .when_named("max");
    context
        .use_supplier(|_| Supplied::Value(json!(2)))
        .when_type(ParamType::Integer);

    assert_eq!(
        value_of(context.resolve(&param("max", ParamType::Integer))),
        Some(json!(1))
    );
    assert_eq!(
        value_of(context.resolve(&param("min", ParamType::Integer))),
        Some(json!(2))
    );
    assert_eq!(context.labels(), vec!["named max", "type integer"]);
}

#[test]
fn test_fallback_answers_unmatched_parameters() {
    let context = SupplierContext::new()
        .supply_value("min", 0)
        .with_fallback(|param| Supplied::Value(json!(param.name.clone())));

    assert_eq!(
        value_of(context.resolve(&param("min", ParamType::Integer))),
        Some(json!(0))
    );
    assert_eq!(
        value_of(context.resolve(&param("label", ParamType::Text))),
        Some(json!("label"))
    );
}

#[test]
fn test_prepend_puts_front_rules_first() {
    let defaults = SupplierContext::new()
        .supply_value("max", 100)
        .with_fallback(|_| Supplied::Value(json!(null)));
    let overrides = SupplierContext::new().supply_value("max", 5);

    let merged = defaults.prepend(overrides);
    assert_eq!(
        value_of(merged.resolve(&param("max", ParamType::Integer))),
        Some(json!(5))
    );
    assert_eq!(merged.len(), 2);
    assert!(merged.has_fallback());
}

#[test]
fn test_append_keeps_own_rules_first() {
    let merged = SupplierContext::new()
        .supply_value("max", 5)
        .append(SupplierContext::new().supply_value("max", 100));
    assert_eq!(
        value_of(merged.resolve(&param("max", ParamType::Integer))),
        Some(json!(5))
    );
}

#[test]
fn test_named_accepting_checks_type() {
    let rule = SupplierRule::new(
        "attribute max",
        predicates::named_accepting("max", &json!("ten")),
        std::sync::Arc::new(|_: &ParamDescriptor| Supplied::Value(json!("ten"))),
    );
    assert!(!rule.matches(&param("max", ParamType::Integer)));
    assert!(rule.matches(&param("max", ParamType::Text)));
    assert!(rule.matches(&param("max", ParamType::Json)));
}

#[test]
fn test_combined_predicates() {
    let mut context = SupplierContext::new();
    context
        .use_supplier(|_| Supplied::Value(json!(true)))
        .labelled("strict flags")
        .when_matching(predicates::all(vec![
            predicates::of_type(ParamType::Bool),
            predicates::any(vec![predicates::named("strict"), predicates::named("exact")]),
        ]));

    assert!(context.resolve(&param("exact", ParamType::Bool)).is_some());
    assert!(context.resolve(&param("exact", ParamType::Text)).is_none());
    assert!(context.resolve(&param("lenient", ParamType::Bool)).is_none());
    assert_eq!(context.labels(), vec!["strict flags"]);
}

#[test]
fn test_closure_predicate() {
    let mut context = SupplierContext::new();
    context
        .use_supplier(|param| Supplied::Value(json!(param.index)))
        .when(|param| param.name.starts_with("arg"));

    let supplied = context.resolve(&ParamDescriptor::new(3, "arg3", ParamType::Integer));
    assert_eq!(value_of(supplied), Some(json!(3)));
}

#[test]
fn test_supply_object() {
    let context = SupplierContext::new().supply_object("clock", 42_u64);
    match context.resolve(&param("clock", ParamType::Object("Clock".into()))) {
        Some(Supplied::Object(object)) => {
            assert_eq!(object.downcast_ref::<u64>(), Some(&42));
        }
        other => panic!("expected object, got {other:?}"),
    }
}
