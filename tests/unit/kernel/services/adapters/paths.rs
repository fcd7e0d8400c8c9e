use super::*;

#[test]
fn test_get_state_dir() {
    let dir = get_state_dir();
    // 测试环境下 HOME 一般可用
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.ends_with(STATE_DIR));
}

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.ends_with(LOG_DIR));
}

#[test]
fn test_config_dir_is_app_scoped() {
    let dir = get_config_dir().unwrap();
    assert!(dir.ends_with(APP_NAME));
}

#[test]
fn test_create_dir_if_missing() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("a").join("b");
    create_dir_if_missing(&nested).unwrap();
    assert!(nested.is_dir());
    create_dir_if_missing(&nested).unwrap();
}
