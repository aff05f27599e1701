//! Metadata catalog tests

use decor_domain::ports::MetadataIntrospector;
use decor_domain::value_objects::{Declaration, DeclarationKind, Tag, TagKind, TagKindDef};
use decor_infrastructure::metadata::{CatalogFile, MetadataCatalog};
use serde_json::json;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[kinds]]
name = "Quantity"
description = "Order line quantity"
tags = [{ kind = "Range", attributes = { min = 1, max = 99 } }]

[[declarations]]
id = "Order.quantity"
kind = "field"
value_type = "i64"
tags = [{ kind = "Quantity" }]

[[declarations]]
id = "Order.note"
"#;

#[test]
fn test_builtins_are_seeded() {
    let catalog = MetadataCatalog::with_builtins();
    let range = catalog.kind(&TagKind::new("Range")).expect("Range kind");
    assert_eq!(range.tags[0].kind.as_str(), "Constraint");
    assert!(catalog.kind_count() >= 10);
}

#[test]
fn test_defaults_fill_missing_attributes() {
    let catalog = MetadataCatalog::with_builtins();
    let declaration = Declaration::field("Order.quantity")
        .with_tag(Tag::new("Range").with("min", 1))
        .unwrap();

    let tags = catalog.direct_tags(&declaration);
    assert_eq!(tags[0].attribute("inclusive"), Some(&json!(true)));
    assert_eq!(tags[0].attribute("min"), Some(&json!(1)));
}

#[test]
fn test_declared_attribute_beats_default() {
    let catalog = MetadataCatalog::with_builtins();
    let declaration = Declaration::field("Order.quantity")
        .with_tag(Tag::new("Range").with("inclusive", false))
        .unwrap();

    let tags = catalog.direct_tags(&declaration);
    assert_eq!(tags[0].attribute("inclusive"), Some(&json!(false)));
}

#[test]
fn test_undefined_kind_has_no_meta_tags() {
    let catalog = MetadataCatalog::new();
    assert!(catalog.kind_tags(&TagKind::new("Unknown")).is_empty());
}

#[test]
fn test_load_toml_text() {
    let mut catalog = MetadataCatalog::new();
    catalog.load_str(CATALOG).unwrap();

    let quantity = catalog.declaration("Order.quantity").expect("declared");
    assert_eq!(quantity.kind, DeclarationKind::Field);
    assert_eq!(quantity.value_type.as_deref(), Some("i64"));
    assert!(quantity.has_tag(&TagKind::new("Quantity")));

    let meta = catalog.kind_tags(&TagKind::new("Quantity"));
    assert_eq!(meta[0].attribute("max"), Some(&json!(99)));

    let note = catalog.declaration("Order.note").expect("declared");
    assert!(note.tags.is_empty());
    assert_eq!(catalog.declarations().len(), 2);
}

#[test]
fn test_duplicate_tag_kind_rejected_on_load() {
    let mut catalog = MetadataCatalog::new();
    let result = catalog.load_str(
        r#"
[[declarations]]
id = "Order.quantity"
tags = [{ kind = "Range" }, { kind = "Range" }]
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_rejected() {
    assert!(CatalogFile::from_toml("[[kinds]\nname =").is_err());
}

#[test]
fn test_load_file_and_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.toml");
    std::fs::write(&path, CATALOG).unwrap();

    let mut catalog = MetadataCatalog::with_builtins();
    catalog.load_file(&path).unwrap();
    assert!(catalog.declaration("Order.quantity").is_some());

    let before = catalog.declarations().len();
    catalog
        .load_file(temp_dir.path().join("absent.toml"))
        .unwrap();
    assert_eq!(catalog.declarations().len(), before);
}

#[test]
fn test_redeclaration_replaces_in_place() {
    let mut catalog = MetadataCatalog::new();
    catalog.add_declaration(Declaration::field("A.a")).unwrap();
    catalog.add_declaration(Declaration::field("A.b")).unwrap();
    catalog
        .add_declaration(Declaration::field("A.a").with_value_type("bool"))
        .unwrap();

    let ids: Vec<&str> = catalog.declarations().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["A.a", "A.b"]);
    assert_eq!(
        catalog.declaration("A.a").unwrap().value_type.as_deref(),
        Some("bool")
    );
}

#[test]
fn test_require_declaration() {
    let catalog = MetadataCatalog::new();
    assert!(catalog.require_declaration("Nope.nothing").is_err());
}

#[test]
fn test_snapshot_survives_toml() {
    let catalog = MetadataCatalog::new()
        .with_kind(TagKindDef::new("Quantity").with_tag(Tag::new("Range").with("max", 99)))
        .with_declaration(
            Declaration::field("Order.quantity")
                .with_tag(Tag::new("Quantity"))
                .unwrap(),
        )
        .unwrap();

    let text = catalog.to_file().to_toml().unwrap();
    let mut reloaded = MetadataCatalog::new();
    reloaded.load_str(&text).unwrap();

    assert_eq!(reloaded.to_file(), catalog.to_file());
}
