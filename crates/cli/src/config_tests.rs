// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_config_load_missing_file_is_default() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config, Config::default());
    assert!(!config.offline);
    assert_eq!(config.remote.url, None);
    assert_eq!(config.remote.timeout_secs, 30);
    assert_eq!(config.remote.probe_timeout_ms, 1500);
}

#[test]
fn test_config_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.remote.url = Some("https://script.example.com/exec".to_string());
    config.remote.timeout_secs = 10;
    config.save(temp.path()).unwrap();

    let loaded = Config::load(temp.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[remote]\nurl = \"http://localhost:8080/exec\"\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.remote.url.as_deref(), Some("http://localhost:8080/exec"));
    assert_eq!(config.remote.timeout_secs, 30);
    assert!(!config.offline);
}

#[test]
fn test_config_malformed_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "offline = [").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_config_rejects_bad_url_in_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "[remote]\nurl = \"ftp://example.com\"\n",
    )
    .unwrap();

    assert!(Config::load(temp.path()).is_err());
}

#[parameterized(
    https = { "https://script.google.com/macros/s/abc/exec" },
    http = { "http://localhost:8080" },
)]
fn test_validate_url_accepts(url: &str) {
    assert!(validate_url(url).is_ok());
}

#[parameterized(
    ws = { "ws://localhost:7890" },
    bare = { "example.com" },
    empty_host = { "https://" },
    path_only = { "http:///exec" },
)]
fn test_validate_url_rejects(url: &str) {
    assert!(validate_url(url).is_err());
}

#[test]
fn test_overrides_replace_url_and_force_offline() {
    let config = Config::default()
        .with_overrides(Some("https://example.com/exec".to_string()), true)
        .unwrap();
    assert_eq!(config.remote.url.as_deref(), Some("https://example.com/exec"));
    assert!(config.offline);
    // Offline hides the URL from callers.
    assert_eq!(config.remote_url(), None);
}

#[test]
fn test_overrides_keep_file_offline() {
    let config = Config {
        offline: true,
        ..Config::default()
    };
    let config = config.with_overrides(None, false).unwrap();
    assert!(config.offline);
}

#[test]
fn test_overrides_reject_bad_url() {
    assert!(Config::default()
        .with_overrides(Some("nope".to_string()), false)
        .is_err());
}

#[test]
fn test_resolve_state_dir_precedence() {
    let flag = PathBuf::from("/from/flag");
    let env = PathBuf::from("/from/env");

    assert_eq!(
        resolve_state_dir(Some(flag.clone()), Some(env.clone())).unwrap(),
        flag
    );
    assert_eq!(resolve_state_dir(None, Some(env.clone())).unwrap(), env);
}

#[test]
fn test_state_paths_layout() {
    let paths = StatePaths::new(Path::new("/state"));
    assert_eq!(paths.db, PathBuf::from("/state/gym.db"));
    assert_eq!(paths.pending, PathBuf::from("/state/pending.jsonl"));
    assert_eq!(paths.log, PathBuf::from("/state/gym-coach.log"));
    assert_eq!(paths.lock, PathBuf::from("/state/gym-coach.lock"));
}

#[test]
fn test_state_paths_ensure_creates_dir() {
    let temp = TempDir::new().unwrap();
    let paths = StatePaths::new(&temp.path().join("a").join("b"));
    paths.ensure().unwrap();
    assert!(paths.root.is_dir());
}
