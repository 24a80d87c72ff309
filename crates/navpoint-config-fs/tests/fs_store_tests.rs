// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! `FsConfigStore` against a scratch directory.

use navpoint_app_core::config::{ConfigError, ConfigStore};
use navpoint_app_core::{ConfigService, OverlaySettings, SettingsPort, SETTINGS_KEY};
use navpoint_config_fs::FsConfigStore;

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FsConfigStore::at(dir.path()).expect("store");
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));
}

#[test]
fn save_writes_one_json_file_per_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FsConfigStore::at(dir.path().join("nested")).expect("store");
    store.save_raw("k", b"{\"a\":1}").expect("save");

    let path = dir.path().join("nested").join("k.json");
    assert_eq!(std::fs::read(&path).expect("read back"), b"{\"a\":1}");
    assert!(!dir.path().join("nested").join("k.json.tmp").exists());
    assert_eq!(store.load_raw("k").expect("load"), b"{\"a\":1}");
}

#[test]
fn keys_cannot_escape_the_base_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FsConfigStore::at(dir.path()).expect("store");
    for key in ["", "../evil", "a/b", ".hidden"] {
        assert!(
            matches!(store.save_raw(key, b"x"), Err(ConfigError::Other(_))),
            "key {key:?} must be rejected"
        );
    }
}

#[test]
fn settings_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = ConfigService::new(FsConfigStore::at(dir.path()).expect("store"));
    first.save_settings(&OverlaySettings::default().with_parking_lots_visible(false));

    let second = ConfigService::new(FsConfigStore::at(dir.path()).expect("store"));
    let loaded = second.load_settings_or_default();
    assert!(loaded.visible);
    assert!(!loaded.parking_lots_visible);
    assert!(dir.path().join(format!("{SETTINGS_KEY}.json")).exists());
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(format!("{SETTINGS_KEY}.json")), "not json").expect("seed");
    let service = ConfigService::new(FsConfigStore::at(dir.path()).expect("store"));
    assert_eq!(service.load_settings_or_default(), OverlaySettings::default());
}
