//! Site content loading from disk.

use learnerspoint_core::config::CONTENT_FILE;
use learnerspoint_core::{SiteConfig, SiteError};
use tempfile::tempdir;

#[test]
fn explicit_file_overrides_builtin_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    std::fs::write(&path, r#"{ "brand": { "city": "Indore" } }"#).unwrap();

    let config = SiteConfig::discover(Some(path.as_path()), None);
    assert_eq!(config.brand.city, "Indore");
    assert_eq!(config.brand.name, "Learner's Point");
}

#[test]
fn config_dir_file_is_used_when_present() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONTENT_FILE),
        r#"{ "relay": { "banner_ms": 1200 } }"#,
    )
    .unwrap();

    let config = SiteConfig::discover(None, Some(dir.path().to_path_buf()));
    assert_eq!(config.relay.banner_ms, 1200);
}

#[test]
fn missing_config_dir_file_means_builtin_content() {
    let dir = tempdir().unwrap();
    let config = SiteConfig::discover(None, Some(dir.path().to_path_buf()));
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn malformed_file_falls_back_to_builtin_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONTENT_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(SiteConfig::load(&path), Err(SiteError::Config(_))));
    assert_eq!(SiteConfig::discover(Some(path.as_path()), None), SiteConfig::default());
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = SiteConfig::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SiteError::Io(_))));
}
