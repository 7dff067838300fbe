//! Integration tests for configuration management

use campus_portal::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.storage.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert_eq!(config.storage.session_file, "session.json");
    assert_eq!(config.portal.splash_delay_ms, 2000);
    assert_eq!(config.portal.min_password_length, 6);
}

#[test]
fn test_defaults_expand_portal_dir() {
    let config = Config::from_defaults();
    assert!(
        !config.storage.data_dir.contains("$CAMPUS_PORTAL"),
        "Placeholder should be expanded: {}",
        config.storage.data_dir
    );
    assert!(config
        .session_file_path()
        .starts_with(Config::get_campus_portal_dir()));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/portal.log"
verbose = true

[storage]
data_dir = "/tmp/portal-data"
session_file = "s.json"

[portal]
splash_delay_ms = 500
min_password_length = 8
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/portal.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.data_dir, "/tmp/portal-data");
    assert_eq!(config.storage.session_file, "s.json");
    assert_eq!(config.portal.splash_delay_ms, 500);
    assert_eq!(config.portal.min_password_length, 8);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.storage.data_dir, "");
    assert_eq!(config.portal.splash_delay_ms, 2000);
    assert_eq!(config.portal.min_password_length, 6);
}

#[test]
fn test_config_from_toml_rejects_garbage() {
    assert!(Config::from_toml("[logging\nlevel = ").is_err());
}

#[test]
fn test_merge_defaults_fills_empty_strings() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "info", "Set values are kept");
    assert_eq!(config.storage.data_dir, defaults.storage.data_dir);
    assert_eq!(config.storage.session_file, defaults.storage.session_file);

    assert!(!config.merge_defaults(&defaults), "Second merge is a no-op");
}

#[test]
fn test_apply_overrides_only_touches_provided_values() {
    let mut config = Config::from_defaults();
    let original_file = config.logging.file.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        data_dir: Some("/srv/portal".to_string()),
        splash_delay_ms: Some(0),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, original_file);
    assert_eq!(config.storage.data_dir, "/srv/portal");
    assert_eq!(config.portal.splash_delay_ms, 0);
}

#[test]
fn test_save_and_load_roundtrip() {
    let (_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").unwrap();
    config.set("splash-delay-ms", "750").unwrap();
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.portal.splash_delay_ms, 750);
}

#[test]
fn test_load_creates_file_on_first_run() {
    let (_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);

    assert!(config_file.exists(), "Defaults should be persisted");
    assert_eq!(
        config.storage.session_file,
        Config::from_defaults().storage.session_file
    );
}

#[test]
fn test_load_unreadable_file_is_not_overwritten() {
    let (_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "this is = = not toml").unwrap();

    let config = Config::load_from(&config_file);

    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
    assert_eq!(
        fs::read_to_string(&config_file).unwrap(),
        "this is = = not toml"
    );
}

#[test]
fn test_get_set_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("session_file", "other.json").unwrap();
    assert_eq!(config.get("session_file").as_deref(), Some("other.json"));

    config.unset("session-file", &defaults).unwrap();
    assert_eq!(config.get("session_file"), defaults.get("session_file"));

    assert!(config.get("token").is_none());
    assert!(config.set("token", "x").is_err());
    assert!(config.unset("token", &defaults).is_err());
}

#[test]
fn test_set_validates_values() {
    let mut config = Config::from_defaults();
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("session_file", "  ").is_err());
    assert!(config.set("verbose", "true").is_ok());
    assert!(config.logging.verbose);
}

#[test]
fn test_display_lists_every_section() {
    let rendered = Config::from_defaults().to_string();
    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[storage]"));
    assert!(rendered.contains("[portal]"));
    assert!(rendered.contains("min_password_length"));
}
