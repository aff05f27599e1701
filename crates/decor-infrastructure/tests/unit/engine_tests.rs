//! Engine bootstrap tests

use decor_domain::value_objects::{Declaration, Tag};
use decor_infrastructure::config::{AppConfig, ConfigBuilder};
use decor_infrastructure::{MetadataCatalog, bootstrap};
use decor_infrastructure::di::Engine;
use serde_json::json;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[kinds]]
name = "Quantity"
tags = [{ kind = "Range", attributes = { min = 1, max = 10 } }]

[[declarations]]
id = "Order.quantity"
tags = [{ kind = "Quantity" }]

[[declarations]]
id = "Order.price"
tags = [{ kind = "Decimal" }]

[[declarations]]
id = "Product.code"
tags = [{ kind = "Uppercase" }, { kind = "Required" }]

[[declarations]]
id = "Order.note"
"#;

fn engine_with_catalog() -> (TempDir, Engine) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.toml");
    std::fs::write(&path, CATALOG).unwrap();
    let config = ConfigBuilder::new().with_catalog_path(&path).build().unwrap();
    let engine = bootstrap(&config).unwrap();
    (temp_dir, engine)
}

#[test]
fn test_catalog_declarations_validate() {
    let (_dir, engine) = engine_with_catalog();

    assert!(engine.validate_id("Order.quantity", &json!(5)).unwrap());
    assert!(!engine.validate_id("Order.quantity", &json!(11)).unwrap());
    assert!(engine.validate_id("Order.note", &json!("anything")).unwrap());
    assert!(engine.validate_id("Order.missing", &json!(1)).is_err());
}

#[test]
fn test_second_constraint_shadowed_by_first() {
    let (_dir, engine) = engine_with_catalog();
    // Uppercase carries no constraint, so Required is the effective validator
    assert!(!engine.validate_id("Product.code", &json!("")).unwrap());
    assert!(engine.validate_id("Product.code", &json!("AB-1")).unwrap());
}

#[test]
fn test_format_and_parse() {
    let (_dir, engine) = engine_with_catalog();
    let catalog = engine.catalog();

    let price = catalog.declaration("Order.price").unwrap();
    assert_eq!(engine.format(price, &json!(3.14159)).unwrap(), "3.14");
    assert_eq!(engine.parse(price, "2.5").unwrap(), json!(2.5));

    let code = catalog.declaration("Product.code").unwrap();
    assert_eq!(engine.format(code, &json!("ab-1")).unwrap(), "AB-1");

    let note = catalog.declaration("Order.note").unwrap();
    assert_eq!(engine.format(note, &json!("plain")).unwrap(), "plain");
    assert_eq!(engine.format(note, &json!([1, 2])).unwrap(), "[1,2]");
    assert_eq!(engine.parse(note, "text").unwrap(), json!("text"));
}

#[test]
fn test_validate_all_memoizes() {
    let (_dir, engine) = engine_with_catalog();
    let quantity = engine.catalog().declaration("Order.quantity").unwrap();

    let verdicts = engine
        .validate_all(&[(quantity, json!(1)), (quantity, json!(20)), (quantity, json!(10))])
        .unwrap();
    assert_eq!(verdicts, vec![true, false, true]);
}

#[test]
fn test_validate_all_without_memoization() {
    let config = ConfigBuilder::new().with_memoization(false).build().unwrap();
    let engine = bootstrap(&config).unwrap();
    let quantity = Declaration::field("Order.quantity")
        .with_tag(Tag::new("Range").with("min", 0).with("max", 1))
        .unwrap();

    let verdicts = engine
        .validate_all(&[(&quantity, json!(0)), (&quantity, json!(2))])
        .unwrap();
    assert_eq!(verdicts, vec![true, false]);
}

#[test]
fn test_without_builtins_nothing_is_decorated() {
    let config = ConfigBuilder::new().with_builtins(false).build().unwrap();
    let engine = bootstrap(&config).unwrap();
    let quantity = Declaration::field("Order.quantity")
        .with_tag(Tag::new("Range").with("min", 1).with("max", 10))
        .unwrap();

    assert_eq!(engine.catalog().kind_count(), 0);
    assert!(engine.validate(&quantity, &json!(11)).unwrap());
}

#[test]
fn test_cache_setting_reaches_factories() {
    let config = ConfigBuilder::new().with_component_cache(false).build().unwrap();
    let engine = Engine::new(config, MetadataCatalog::with_builtins());
    let name = Declaration::field("Customer.name")
        .with_tag(Tag::new("Required"))
        .unwrap();

    assert!(!engine.validate(&name, &json!(null)).unwrap());
    assert_eq!(engine.validators().cached_len(), 0);
}

#[test]
fn test_default_config_bootstraps() {
    let engine = bootstrap(&AppConfig::default()).unwrap();
    assert!(engine.validators().registry().contains("RangeValidator"));
    assert!(engine.formatters().registry().contains("DecimalFormatter"));
    assert_eq!(engine.config(), &AppConfig::default());
}
