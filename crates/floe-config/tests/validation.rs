//! Integration tests for descriptor validation.

use std::fs;
use std::path::PathBuf;

use floe_config::{
    load_file, validate_fs, validate_schema, ConfigError, ConfigValidator, FsValidator,
    PolicyMode, SchemaValidator,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("floe.config.json");
    fs::write(&path, body).expect("write config");
    path
}

#[test]
fn valid_descriptor_passes_schema_validation() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"{
            "mount": { "src": "/dist" },
            "devOptions": { "port": 8888 },
            "buildOptions": { "out": "dist" }
        }"#,
    );

    let config = load_file(&path).expect("load");
    validate_schema(&config).expect("schema validation");
}

#[test]
fn privileged_port_fails_with_field_name() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, r#"{ "devOptions": { "port": 443 } }"#);

    let config = load_file(&path).expect("load");
    let err = validate_schema(&config).expect_err("privileged port");
    match err {
        ConfigError::Schema { field, .. } => assert_eq!(field, "devOptions.port"),
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn policy_locked_open_rejected_by_default() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"{ "devOptions": { "port": 8888, "open": "default" } }"#,
    );

    let config = load_file(&path).expect("load");
    let err = validate_schema(&config).expect_err("policy override");
    assert!(matches!(err, ConfigError::Schema { ref field, .. } if field == "devOptions.open"));
}

#[test]
fn policy_locked_output_rejected_by_default() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"{ "devOptions": { "port": 8888, "output": "dashboard" } }"#,
    );

    let config = load_file(&path).expect("load");
    let err = validate_schema(&config).expect_err("policy override");
    assert!(matches!(err, ConfigError::Schema { ref field, .. } if field == "devOptions.output"));
}

#[test]
fn warn_mode_accepts_policy_overrides() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"{ "devOptions": { "port": 8888, "open": "default", "output": "dashboard" } }"#,
    );

    let config = load_file(&path).expect("load");
    SchemaValidator::with_policy(PolicyMode::Warn)
        .validate(&config)
        .expect("warn mode");
}

#[test]
fn unknown_open_mode_fails_at_decode() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, r#"{ "devOptions": { "open": "chrome" } }"#);

    let err = load_file(&path).expect_err("unknown enum value");
    assert!(matches!(err, ConfigError::Schema { .. }));
}

#[test]
fn fs_validation_checks_mounted_directories() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("src")).expect("mkdir");
    let path = write_config(
        &dir,
        r#"{
            "mount": { "src": "/dist", "public": "/" },
            "devOptions": { "port": 8888 }
        }"#,
    );

    let config = load_file(&path).expect("load");
    let err = validate_fs(&config, dir.path()).expect_err("missing public dir");
    assert!(matches!(err, ConfigError::Schema { ref field, .. } if field == "mount.public"));

    fs::create_dir(dir.path().join("public")).expect("mkdir");
    validate_fs(&config, dir.path()).expect("all mounts present");
}

#[test]
fn fs_validator_carries_policy_mode() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"{ "devOptions": { "port": 8888, "open": "default" } }"#,
    );

    let config = load_file(&path).expect("load");
    assert!(FsValidator::new(dir.path()).validate(&config).is_err());
    FsValidator::with_policy(dir.path(), PolicyMode::Warn)
        .validate(&config)
        .expect("warn mode propagates to fs validation");
}

#[test]
fn malformed_mount_produces_no_descriptor() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, r#"{ "mount": 42 }"#);

    let err = load_file(&path).expect_err("mount must be a mapping");
    assert!(matches!(err, ConfigError::Schema { .. }));
}
