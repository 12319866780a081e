//! Tests for default values and edge cases.

use floe_config::{
    BuildOptions, BundlerConfig, DevOptions, EsTarget, OpenMode, OptimizeOptions, OutputMode,
    PackageOptions, PackageSource,
};
use std::path::PathBuf;

#[test]
fn bundler_config_defaults() {
    let config = BundlerConfig::default();
    assert!(config.mount.is_empty());
    assert!(config.plugins.is_empty());
    assert!(config.alias.is_empty());
    assert!(config.optimize.is_none());
}

#[test]
fn dev_options_defaults() {
    let dev = DevOptions::default();
    assert_eq!(dev.hostname, "localhost");
    assert_eq!(dev.port, 8080);
    assert_eq!(dev.open, OpenMode::None);
    assert_eq!(dev.output, OutputMode::Stream);
}

#[test]
fn build_options_defaults() {
    let build = BuildOptions::default();
    assert_eq!(build.out, PathBuf::from("build"));
    assert_eq!(build.base_url, "/");
    assert!(!build.clean);
}

#[test]
fn package_options_defaults() {
    let packages = PackageOptions::default();
    assert_eq!(packages.source, PackageSource::Local);
    assert!(packages.known_entrypoints.is_empty());
}

#[test]
fn optimize_options_defaults() {
    let optimize = OptimizeOptions::default();
    assert!(!optimize.bundle);
    assert!(!optimize.minify);
    assert_eq!(optimize.target, EsTarget::ES2018);
}

#[test]
fn open_mode_enum() {
    assert_eq!(OpenMode::default(), OpenMode::None);
    assert_ne!(OpenMode::None, OpenMode::Default);
}

#[test]
fn output_mode_enum() {
    assert_eq!(OutputMode::default(), OutputMode::Stream);
    assert_ne!(OutputMode::Stream, OutputMode::Dashboard);
}

#[test]
fn package_source_enum() {
    assert_eq!(PackageSource::default(), PackageSource::Local);
    assert_ne!(PackageSource::Local, PackageSource::Remote);
}

#[test]
fn all_es_targets() {
    let targets = [
        EsTarget::ES2015,
        EsTarget::ES2016,
        EsTarget::ES2017,
        EsTarget::ES2018,
        EsTarget::ES2019,
        EsTarget::ES2020,
        EsTarget::ES2021,
        EsTarget::ES2022,
        EsTarget::ESNext,
    ];
    assert_eq!(targets.len(), 9);
    assert_eq!(EsTarget::default(), EsTarget::ES2018);
}

#[test]
fn empty_declaration_yields_defaults() {
    let config = BundlerConfig::from_value(serde_json::json!({})).expect("empty declaration");
    assert_eq!(config, BundlerConfig::default());
}
