use super::*;
use crate::kernel::services::ports::settings::DEFAULT_REQUEST_COUNT;
use tempfile::tempdir;

#[test]
fn write_default_settings_creates_file_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config").join(SETTINGS_FILE);

    write_default_settings(&path).unwrap();
    let settings = read_settings(&path).unwrap();
    assert_eq!(settings, Settings::default());

    std::fs::write(&path, r#"{"default_request_count": 5}"#).unwrap();
    write_default_settings(&path).unwrap();
    assert_eq!(read_settings(&path).unwrap().default_request_count, 5);
}

#[test]
fn read_settings_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        read_settings(&path),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn read_settings_reports_missing_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        read_settings(&dir.path().join("absent.json")),
        Err(SettingsError::Read { .. })
    ));
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(
        &path,
        r#"{"variants":[{"id":9,"route":"/redesign/9","label":"Nine"}]}"#,
    )
    .unwrap();

    let settings = read_settings(&path).unwrap();
    assert_eq!(settings.variants.len(), 1);
    assert_eq!(settings.default_request_count, DEFAULT_REQUEST_COUNT);
    assert_eq!(settings.catalog().len(), 1);
}

#[test]
fn settings_path_ends_with_settings_file() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(SETTINGS_FILE));
    }
}
