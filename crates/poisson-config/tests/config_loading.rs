//! Configuration loading tests against real files on disk.
//!
//! Covers:
//! - Loading and validating an explicit model.json path
//! - Rejection of missing, malformed, and semantically invalid files
//! - Building and labelling models from a loaded config

use poisson_config::{ModelConfig, ValidationError};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(dir: &Path, name: &str, body: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body.to_string()).expect("write config");
    path
}

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "model.json",
        &json!({
            "schema_version": "1.0.0",
            "default_lambtha": 7.0,
            "display_precision": 3
        }),
    );

    let config = ModelConfig::load(&path).expect("valid config loads");
    assert_eq!(config.default_lambtha, 7.0);

    let model = config.build(None).unwrap();
    assert_eq!(config.label(&model), "Poisson distribution with λ = 7.000");

    let model = config.build(Some(&json!([1, 2, 3]))).unwrap();
    assert_eq!(config.label(&model), "Poisson distribution with λ = 2.000");
}

#[test]
fn test_load_minimal_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "model.json", &json!({"schema_version": "1.0.0"}));

    let config = ModelConfig::load(&path).unwrap();
    assert_eq!(config, ModelConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ModelConfig::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ValidationError::IoError(_)));
    assert_eq!(err.code(), 60);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"schema_version\": ").unwrap();

    let err = ModelConfig::load(&path).unwrap_err();
    assert!(matches!(err, ValidationError::ParseError(_)));
    assert_eq!(err.code(), 61);
}

#[test]
fn test_invalid_rate_in_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "neg.json",
        &json!({"schema_version": "1.0.0", "default_lambtha": -1.0}),
    );

    let err = ModelConfig::load(&path).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { .. }));
}

#[test]
fn test_version_mismatch_in_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "old.json", &json!({"schema_version": "0.1.0"}));

    let err = ModelConfig::load(&path).unwrap_err();
    assert!(matches!(err, ValidationError::VersionMismatch { .. }));
}

#[test]
fn test_from_file_skips_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "old.json", &json!({"schema_version": "0.1.0"}));

    let config = ModelConfig::from_file(&path).expect("parse only");
    assert_eq!(config.schema_version, "0.1.0");
}
