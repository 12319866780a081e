//! Round-trip fidelity of `load` + `get`, and load idempotence.

use std::fs;

use floe_config::{load_file, BundlerConfig, EsTarget, OpenMode, OutputMode, PackageSource};
use serde_json::json;
use tempfile::TempDir;

/// The profile-A declaration: the full field surface of a real
/// descriptor.
const PROFILE_A: &str = r#"{
    "mount": {
        "public": { "url": "/", "static": true },
        "src": "/dist"
    },
    "plugins": ["@floe/plugin-sass", ["@floe/plugin-ts", { "strict": true }]],
    "packageOptions": { "source": "local" },
    "devOptions": {
        "port": 8888,
        "open": "none",
        "output": "stream"
    },
    "buildOptions": { "out": "dist" },
    "alias": { "components": "./src/components" },
    "optimize": { "bundle": true, "minify": true, "target": "es2018" }
}"#;

fn load_profile_a(dir: &TempDir) -> BundlerConfig {
    let path = dir.path().join("floe.config.json");
    fs::write(&path, PROFILE_A).expect("write config");
    load_file(&path).expect("load profile A")
}

#[test]
fn every_declared_field_reads_back_literally() {
    let dir = TempDir::new().expect("tempdir");
    let config = load_profile_a(&dir);

    assert_eq!(config.get("mount.src"), Some(json!("/dist")));
    assert_eq!(config.get("mount.public.url"), Some(json!("/")));
    assert_eq!(config.get("mount.public.static"), Some(json!(true)));
    assert_eq!(config.get("packageOptions.source"), Some(json!("local")));
    assert_eq!(config.get("devOptions.port"), Some(json!(8888)));
    assert_eq!(config.get("devOptions.open"), Some(json!("none")));
    assert_eq!(config.get("devOptions.output"), Some(json!("stream")));
    assert_eq!(config.get("buildOptions.out"), Some(json!("dist")));
    assert_eq!(
        config.get("alias.components"),
        Some(json!("./src/components"))
    );
    assert_eq!(config.get("optimize.bundle"), Some(json!(true)));
    assert_eq!(config.get("optimize.minify"), Some(json!(true)));
    assert_eq!(config.get("optimize.target"), Some(json!("es2018")));
}

#[test]
fn typed_accessors_match_the_declaration() {
    let dir = TempDir::new().expect("tempdir");
    let config = load_profile_a(&dir);

    assert_eq!(config.dev_options.port, 8888);
    assert_eq!(config.dev_options.open, OpenMode::None);
    assert_eq!(config.dev_options.output, OutputMode::Stream);
    assert_eq!(config.package_options.source, PackageSource::Local);

    assert_eq!(config.plugins.len(), 2);
    assert_eq!(config.plugins[0].name(), "@floe/plugin-sass");
    assert_eq!(config.plugins[1].name(), "@floe/plugin-ts");

    let optimize = config.optimize.expect("optimize section");
    assert!(optimize.bundle);
    assert!(optimize.minify);
    assert_eq!(optimize.target, EsTarget::ES2018);
}

#[test]
fn loading_twice_is_idempotent() {
    let dir = TempDir::new().expect("tempdir");
    let first = load_profile_a(&dir);
    let second = load_profile_a(&dir);
    assert_eq!(first, second);
}

#[test]
fn port_is_an_integer_in_range() {
    let out_of_range = BundlerConfig::from_value(json!({
        "devOptions": { "port": 70000 }
    }));
    assert!(out_of_range.is_err());

    let not_an_integer = BundlerConfig::from_value(json!({
        "devOptions": { "port": "8888" }
    }));
    assert!(not_an_integer.is_err());
}

#[test]
fn unrecognized_optimize_target_is_rejected() {
    let result = BundlerConfig::from_value(json!({
        "optimize": { "target": "es1995" }
    }));
    assert!(result.is_err());
}
