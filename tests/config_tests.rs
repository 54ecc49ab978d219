//! Tests for loading `HostConfig` from disk

use std::fs;
use std::path::PathBuf;

use halow_chanmap::{HalowError, HostConfig};
use tempfile::tempdir;

#[test]
fn test_load_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("halow.json");
    fs::write(
        &path,
        r#"{
            "country_param": "/tmp/country",
            "debugfs_root": "/mnt/debug/ieee80211",
            "morse_cli": "/usr/local/bin/morse_cli"
        }"#,
    )
    .unwrap();

    let cfg = HostConfig::load(&path).unwrap();
    assert_eq!(cfg.country_param, PathBuf::from("/tmp/country"));
    assert_eq!(cfg.morse_cli, "/usr/local/bin/morse_cli");
    assert_eq!(
        cfg.mmrc_table_path("phy2"),
        PathBuf::from("/mnt/debug/ieee80211/phy2/morse/mmrc_table")
    );
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(HostConfig::from_json("{}").unwrap(), HostConfig::default());
}

#[test]
fn test_missing_config_file() {
    let err = HostConfig::load("/nonexistent/halow.json").unwrap_err();
    assert!(matches!(err, HalowError::Io { .. }));
}

#[test]
fn test_config_serializes_round_trip() {
    let cfg = HostConfig::default();
    let text = serde_json::to_string(&cfg).unwrap();
    assert_eq!(HostConfig::from_json(&text).unwrap(), cfg);
}
