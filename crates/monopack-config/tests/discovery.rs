//! Tests for sibling package alias discovery

use monopack_config::{AliasDiscovery, ConfigError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_package(modules: &Path, dir: &str, manifest: Option<&str>) {
    let pkg = modules.join(dir);
    fs::create_dir_all(pkg.join("src")).unwrap();
    if let Some(manifest) = manifest {
        fs::write(pkg.join("package.json"), manifest).unwrap();
    }
}

#[test]
fn aliases_every_valid_sub_package() {
    let dir = TempDir::new().unwrap();
    write_package(dir.path(), "core", Some(r#"{"name": "@deck.gl/core", "version": "8.1.0"}"#));
    write_package(dir.path(), "layers", Some(r#"{"name": "@deck.gl/layers"}"#));
    write_package(dir.path(), "aggregation-layers", Some(r#"{"name": "@deck.gl/aggregation-layers"}"#));

    let aliases = AliasDiscovery::new(dir.path()).discover().unwrap();

    let names: Vec<_> = aliases.keys().map(String::as_str).collect();
    // visited in directory name order
    assert_eq!(
        names,
        vec!["@deck.gl/aggregation-layers", "@deck.gl/core", "@deck.gl/layers"]
    );
    for (name, src) in &aliases {
        let dir_name = name.trim_start_matches("@deck.gl/");
        assert!(src.ends_with(Path::new(dir_name).join("src")), "{name}");
    }
}

#[test]
fn sub_package_without_manifest_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_package(dir.path(), "core", Some(r#"{"name": "@deck.gl/core"}"#));
    write_package(dir.path(), "scratch", None);

    let scan = AliasDiscovery::new(dir.path()).scan().unwrap();

    assert_eq!(scan.aliases.len(), 1);
    assert!(scan.aliases.contains_key("@deck.gl/core"));
    assert_eq!(scan.skipped.len(), 1);
    assert!(scan.skipped[0].reason.contains("not found"));
}

#[test]
fn manifest_without_name_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_package(dir.path(), "nameless", Some(r#"{"version": "1.0.0"}"#));

    let scan = AliasDiscovery::new(dir.path()).scan().unwrap();
    assert!(scan.aliases.is_empty());
    assert_eq!(scan.skipped.len(), 1);
}

#[test]
fn empty_parent_yields_empty_map() {
    let dir = TempDir::new().unwrap();
    let aliases = AliasDiscovery::new(dir.path()).discover().unwrap();
    assert!(aliases.is_empty());
}

#[test]
fn missing_parent_fails() {
    let dir = TempDir::new().unwrap();
    let err = AliasDiscovery::new(dir.path().join("modules"))
        .discover()
        .unwrap_err();
    assert!(matches!(err, ConfigError::AliasDirUnreadable { .. }));
    assert!(err.to_string().contains("alias directory cannot be read"));
}

#[test]
fn repeated_scans_are_equal() {
    let dir = TempDir::new().unwrap();
    write_package(dir.path(), "b", Some(r#"{"name": "b"}"#));
    write_package(dir.path(), "a", Some(r#"{"name": "a"}"#));
    write_package(dir.path(), "c", Some("not json"));

    let discovery = AliasDiscovery::new(dir.path());
    assert_eq!(discovery.scan().unwrap(), discovery.scan().unwrap());
}
