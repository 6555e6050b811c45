//! Settings file tests.

use residex::{EntityId, EntityKind, ResolverConfig, ResolverError, Settings};
use tempfile::TempDir;

fn sample_settings() -> Settings {
    let mut settings = Settings {
        resolver: ResolverConfig::default()
            .with_name_fallback(true)
            .with_placeholder("n/a"),
        ..Settings::default()
    };
    settings.session.select(EntityKind::Mtk, 1);
    settings.session.select(EntityKind::Complex, "c-10");
    settings.session.search = Some("flat".into());
    settings
}

#[test]
fn test_json_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let settings = sample_settings();
    settings.write_to_file(&path).unwrap();
    let loaded = Settings::read_from_file(&path).unwrap();

    assert_eq!(loaded, settings);
    assert_eq!(loaded.session.selected(EntityKind::Mtk), Some(&EntityId::Int(1)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::read_from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ResolverError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Settings::read_from_file(&path),
        Err(ResolverError::Json(_))
    ));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = sample_settings().write_to_file(dir.path().join("settings.ini"));
    assert!(matches!(result, Err(ResolverError::UnsupportedFormat(_))));
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yml");

    let settings = sample_settings();
    settings.write_to_file(&path).unwrap();
    assert_eq!(Settings::read_from_file(&path).unwrap(), settings);
}
