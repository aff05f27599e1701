//! Tests for the domain resolver

use std::sync::Arc;

use decor_application::domain_services::{DecorationGraph, DomainResolver, ResolutionSession};
use decor_domain::ports::DirectOnlyIntrospector;
use decor_domain::value_objects::{Tag, TagKind};

use crate::support::{MapIntrospector, field, resolver};

fn constraint(validator: &str) -> Tag {
    Tag::new("Constraint").with("validated_by", validator)
}

#[test]
fn test_direct_tag_wins_over_meta_tag() {
    let introspector = Arc::new(
        MapIntrospector::new().kind("Range", vec![constraint("RangeValidator")]),
    );
    let declaration = field(
        "Order.quantity",
        vec![
            Tag::new("Range").with("min", 1),
            constraint("DirectValidator"),
        ],
    );

    let chain = resolver(introspector)
        .resolve(&declaration, &TagKind::new("Constraint"))
        .expect("found");

    assert!(chain.is_direct());
    assert_eq!(chain.leaf().attribute_str("validated_by"), Some("DirectValidator"));
}

#[test]
fn test_direct_only_introspection_sees_no_meta_tags() {
    let resolver = DomainResolver::new(DecorationGraph::new(Arc::new(DirectOnlyIntrospector)));
    let declaration = field(
        "Order.quantity",
        vec![Tag::new("Range"), constraint("DirectValidator")],
    );

    let chain = resolver
        .resolve(&declaration, &TagKind::new("Constraint"))
        .expect("found");
    assert_eq!(chain.kinds(), [&TagKind::new("Constraint")]);

    let undecorated = field("Order.note", vec![Tag::new("Range")]);
    assert!(resolver.resolve(&undecorated, &TagKind::new("Constraint")).is_none());
}

#[test]
fn test_meta_tag_found_through_one_hop() {
    let introspector = Arc::new(
        MapIntrospector::new().kind("Range", vec![constraint("RangeValidator")]),
    );
    let declaration = field(
        "Order.quantity",
        vec![Tag::new("Range").with("min", 1).with("max", 10)],
    );

    let chain = resolver(introspector)
        .resolve(&declaration, &TagKind::new("Constraint"))
        .expect("found");

    assert_eq!(chain.to_string(), "Range -> Constraint");
    assert_eq!(chain.root().attribute("max"), Some(&serde_json::json!(10)));
    assert_eq!(chain.leaf().attribute_str("validated_by"), Some("RangeValidator"));
}

#[test]
fn test_absent_kind_is_none() {
    let introspector = Arc::new(MapIntrospector::new());
    let declaration = field("Order.note", vec![Tag::new("Documented")]);

    assert!(
        resolver(introspector)
            .resolve(&declaration, &TagKind::new("Constraint"))
            .is_none()
    );
}

#[test]
fn test_untagged_declaration_is_none() {
    let introspector = Arc::new(MapIntrospector::new());
    let declaration = field("Order.note", vec![]);
    assert!(
        resolver(introspector)
            .resolve(&declaration, &TagKind::new("Constraint"))
            .is_none()
    );
}

#[test]
fn test_mutual_cycle_terminates() {
    let introspector = Arc::new(
        MapIntrospector::new()
            .kind("A", vec![Tag::new("B")])
            .kind("B", vec![Tag::new("A")]),
    );
    let declaration = field("Order.id", vec![Tag::new("A")]);

    let resolver = resolver(Arc::clone(&introspector));
    assert!(resolver.resolve(&declaration, &TagKind::new("C")).is_none());
    assert!(introspector.kind_lookups() <= 2);
}

#[test]
fn test_self_cycle_terminates() {
    let introspector = Arc::new(MapIntrospector::new().kind("A", vec![Tag::new("A")]));
    let declaration = field("Order.id", vec![Tag::new("A")]);

    assert!(
        resolver(introspector)
            .resolve(&declaration, &TagKind::new("C"))
            .is_none()
    );
}

#[test]
fn test_cycle_with_exit_is_found() {
    let introspector = Arc::new(
        MapIntrospector::new()
            .kind("A", vec![Tag::new("B")])
            .kind("B", vec![Tag::new("A"), constraint("CycleValidator")]),
    );
    let declaration = field("Order.id", vec![Tag::new("A")]);

    let chain = resolver(introspector)
        .resolve(&declaration, &TagKind::new("Constraint"))
        .expect("found");
    assert_eq!(chain.to_string(), "A -> B -> Constraint");
}

fn shallow_and_deep(deep_first: bool) -> Option<String> {
    let introspector = Arc::new(
        MapIntrospector::new()
            .kind("Deep", vec![Tag::new("Middle")])
            .kind("Middle", vec![constraint("DeepValidator")])
            .kind("Shallow", vec![constraint("ShallowValidator")]),
    );
    let mut tags = vec![Tag::new("Deep"), Tag::new("Shallow")];
    if !deep_first {
        tags.reverse();
    }
    let declaration = field("Order.total", tags);

    resolver(introspector)
        .resolve(&declaration, &TagKind::new("Constraint"))
        .and_then(|chain| chain.leaf().attribute_str("validated_by").map(str::to_string))
}

#[test]
fn test_shallow_match_beats_deep_match_in_any_order() {
    assert_eq!(shallow_and_deep(true).as_deref(), Some("ShallowValidator"));
    assert_eq!(shallow_and_deep(false).as_deref(), Some("ShallowValidator"));
}

#[test]
fn test_first_sibling_wins_at_equal_depth() {
    let introspector = Arc::new(
        MapIntrospector::new()
            .kind("Left", vec![constraint("LeftValidator")])
            .kind("Right", vec![constraint("RightValidator")]),
    );
    let declaration = field("Order.total", vec![Tag::new("Left"), Tag::new("Right")]);

    let chain = resolver(introspector)
        .resolve(&declaration, &TagKind::new("Constraint"))
        .expect("found");
    assert_eq!(chain.root().kind.as_str(), "Left");
}

#[test]
fn test_resolve_from_tags() {
    let introspector = Arc::new(
        MapIntrospector::new().kind("Range", vec![constraint("RangeValidator")]),
    );
    let chain = resolver(introspector)
        .resolve_from_tags(&[Tag::new("Range")], &TagKind::new("Constraint"))
        .expect("found");
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_resolve_all_orders_by_length() {
    let introspector = Arc::new(
        MapIntrospector::new()
            .kind("Deep", vec![Tag::new("Middle")])
            .kind("Middle", vec![constraint("DeepValidator")])
            .kind("Shallow", vec![constraint("ShallowValidator")]),
    );
    let declaration = field("Order.total", vec![Tag::new("Deep"), Tag::new("Shallow")]);

    let chains = resolver(introspector).resolve_all(&declaration, &TagKind::new("Constraint"));
    let rendered: Vec<String> = chains.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["Shallow -> Constraint", "Deep -> Middle -> Constraint"]
    );
}

#[test]
fn test_resolve_all_terminates_on_cycles() {
    let introspector = Arc::new(
        MapIntrospector::new()
            .kind("A", vec![Tag::new("B"), constraint("AValidator")])
            .kind("B", vec![Tag::new("A")]),
    );
    let declaration = field("Order.id", vec![Tag::new("A")]);

    let chains = resolver(introspector).resolve_all(&declaration, &TagKind::new("Constraint"));
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].to_string(), "A -> Constraint");
}

#[test]
fn test_session_memoizes_per_declaration() {
    let introspector = Arc::new(
        MapIntrospector::new().kind("Range", vec![constraint("RangeValidator")]),
    );
    let resolver = resolver(Arc::clone(&introspector));
    let kind = TagKind::new("Constraint");
    let quantity = field("Order.quantity", vec![Tag::new("Range")]);
    let note = field("Order.note", vec![Tag::new("Documented")]);

    let mut session = ResolutionSession::new();
    let first = resolver.resolve_in(&mut session, &quantity, &kind);
    let lookups = introspector.kind_lookups();
    let second = resolver.resolve_in(&mut session, &quantity, &kind);

    assert_eq!(first, second);
    assert_eq!(session.memo_hits(), 1);
    assert_eq!(introspector.kind_lookups(), lookups);

    assert!(resolver.resolve_in(&mut session, &note, &kind).is_none());
    assert_eq!(session.len(), 2);
    assert_eq!(session.memo_hits(), 1);
}

#[test]
fn test_fresh_session_starts_empty() {
    let session = ResolutionSession::new();
    assert!(session.is_empty());
    assert_eq!(session.memo_hits(), 0);
}
