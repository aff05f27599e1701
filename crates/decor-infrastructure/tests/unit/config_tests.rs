//! Configuration Loader Tests

use std::env;

use decor_infrastructure::config::{
    AppConfig, ComponentKindConfig, ConfigBuilder, ConfigLoader, LoggingConfig,
};
use decor_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

/// Helper to set env var
fn set_env(key: &str, value: &str) {
    // SAFETY: each test uses its own prefix and std readers share the env lock
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var
fn remove_env(key: &str) {
    // SAFETY: see `set_env`
    unsafe {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(config.resolution.cache_shared_components);
    assert!(config.resolution.memoize);
    assert!(config.catalog.include_builtins);
    assert_eq!(config.components.validator.tag_kind, "Constraint");
    assert_eq!(
        config.components.formatter.points_to.as_deref(),
        Some("formatted_by")
    );
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("decor.toml");
    std::fs::write(
        &config_path,
        r#"
[logging]
level = "debug"

[resolution]
cache_shared_components = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("DECOR_TEST_FILE")
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(!config.resolution.cache_shared_components);
    assert!(config.resolution.memoize);
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_env_prefix("DECOR_TEST_MISSING")
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("decor.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"debug\"\n").unwrap();

    set_env("DECOR_TEST_ENV_LOGGING__LEVEL", "error");
    set_env("DECOR_TEST_ENV_RESOLUTION__MEMOIZE", "false");
    let loaded = ConfigLoader::new()
        .with_env_prefix("DECOR_TEST_ENV")
        .with_config_path(&config_path)
        .load();
    remove_env("DECOR_TEST_ENV_LOGGING__LEVEL");
    remove_env("DECOR_TEST_ENV_RESOLUTION__MEMOIZE");

    let config = loaded.unwrap();
    assert_eq!(config.logging.level, "error");
    assert!(!config.resolution.memoize);
}

#[test]
fn test_invalid_log_level_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("decor.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let result = ConfigLoader::new()
        .with_env_prefix("DECOR_TEST_INVALID")
        .with_config_path(&config_path)
        .load();
    assert!(result.is_err());
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "trace".to_string(),
            json_format: true,
            file_output: None,
        })
        .with_component_cache(false)
        .with_validator_kind(ComponentKindConfig::new("Check", Some("checked_by")))
        .build()
        .unwrap();

    let loader = ConfigLoader::new()
        .with_env_prefix("DECOR_TEST_SAVE")
        .with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();

    assert_eq!(loader.load().unwrap(), original);
}

#[test]
fn test_builder_rejects_shared_tag_kind() {
    let result = ConfigBuilder::new()
        .with_validator_kind(ComponentKindConfig::new("Format", Some("formatted_by")))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_builder_rejects_empty_points_to() {
    let result = ConfigBuilder::new()
        .with_formatter_kind(ComponentKindConfig::new("Render", Some(" ")))
        .build();
    assert!(result.is_err());
}
