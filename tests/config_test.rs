// tests/config_test.rs

use modver::config::{load_config, Config, TypeMapping};
use modver::domain::BumpSeverity;
use serial_test::serial;
use std::fs;

#[test]
fn test_default_config_shape() {
    let config = Config::default();
    assert_eq!(
        config.severities.types.get("feat"),
        Some(&TypeMapping::Minor)
    );
    assert!(!config.modes.prerelease);
    assert!(config.modules.is_empty());
}

#[test]
fn test_load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
            [prerelease]
            identifier = "beta"

            [modes]
            snapshot = true

            [[modules]]
            id = "root"
            path = "."
            version = "0.1.0"
        "#,
    )
    .unwrap();

    let config = load_config(path.to_str()).unwrap();
    assert_eq!(config.prerelease.identifier, "beta");
    assert!(config.modes.snapshot);
    assert_eq!(config.modules.len(), 1);
}

#[test]
fn test_load_missing_explicit_path_fails() {
    assert!(load_config(Some("/nonexistent/modver.toml")).is_err());
}

#[test]
fn test_load_rejects_malformed_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        r#"
            [severities.types]
            feat = "enormous"
        "#,
    )
    .unwrap();

    assert!(load_config(path.to_str()).is_err());
}

#[test]
fn test_load_rejects_invalid_prerelease_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        r#"
            [prerelease]
            identifier = "has spaces"
        "#,
    )
    .unwrap();

    assert!(load_config(path.to_str()).is_err());
}

#[test]
#[serial]
fn test_discovery_of_local_modver_toml() {
    let dir = tempfile::tempdir().unwrap();
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    fs::write(
        "modver.toml",
        r#"
            [severities]
            default_severity = "patch"
        "#,
    )
    .unwrap();

    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = result.unwrap();
    assert_eq!(config.severities.default_severity, BumpSeverity::Patch);
}
