//! Unit tests for config module.

use panel_resize::{ResizeConfig, ResizeError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resize.json");
    fs::write(&path, r#"{"min_height": 120, "prevent_default_on_move": false}"#).unwrap();

    let config = ResizeConfig::load(&path).unwrap();
    assert_eq!(config.min_height, 120.0);
    assert!(!config.prevent_default_on_move);
}

#[test]
fn test_empty_object_is_default() {
    let config = ResizeConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ResizeConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = ResizeConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ResizeError::Io(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let err = ResizeConfig::from_json_str("{min_height: }").unwrap_err();
    assert!(matches!(err, ResizeError::Json(_)));
}

#[test]
fn test_validation_rejects_nan() {
    let config = ResizeConfig {
        min_height: f32::NAN,
        ..ResizeConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().starts_with("Invalid config"));
}
