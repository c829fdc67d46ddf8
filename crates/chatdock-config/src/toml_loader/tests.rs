//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use chatdock_common::ConfigError;
use chatdock_geometry::ShellVariant;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_chatdock_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[backend]
base_url = "https://assist.example.com"

[panel]
variant = "compact"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.base_url, "https://assist.example.com");
    assert_eq!(config.panel.variant, ShellVariant::Compact);
    // Defaults preserved
    assert_eq!(config.backend.user_id, "EMP001");
    assert_eq!(config.panel.padding, 20.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_keeps_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[panel]
padding = 999.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.panel.padding, 999.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chatdock").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.panel.min_width, 300.0);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ChatdockConfig;

    let content = default_config_toml();
    let config: ChatdockConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.panel.variant, ShellVariant::Profiles);
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config dir.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("chatdock"));
        assert!(path_str.ends_with("config.toml"));
    }
}
