// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gym-coach init` and first-run initialization.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn init_offline_seeds_builtin_roster() {
    let temp = TempDir::new().unwrap();

    gym_in(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded built-in roster"))
        .stdout(predicate::str::contains(
            "5 students, 6 exercises, 5 goals",
        ))
        .stdout(predicate::str::contains("No remote configured"));

    assert!(temp.path().join("gym.db").exists());
    assert!(temp.path().join("pending.jsonl").exists());
    assert!(temp.path().join("gym-coach.log").exists());
}

#[test]
fn init_twice_keeps_existing_data() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["set-group", "1", "Г-4"])
        .assert()
        .success();

    gym_in(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    let student = json_output(temp.path(), &["show", "1"]);
    assert_eq!(student["group"], "Г-4");
}

#[test]
fn init_saves_remote_url() {
    let temp = TempDir::new().unwrap();
    gym_in(temp.path())
        .args(["init", "--remote-url", "https://example.com/macros/exec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No remote configured").not());

    let config = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(config.contains("url = \"https://example.com/macros/exec\""));
    assert!(!config.contains("offline = true"));
}

#[test]
fn init_rejects_non_http_url() {
    let temp = TempDir::new().unwrap();
    gym_in(temp.path())
        .args(["init", "--remote-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: config error: invalid remote URL"));
}

#[test]
fn any_command_initializes_fresh_state() {
    let temp = TempDir::new().unwrap();
    let students = json_output(temp.path(), &["students"]);
    assert_eq!(students.as_array().unwrap().len(), 5);
}

#[test]
fn state_dir_from_env() {
    let temp = TempDir::new().unwrap();
    gym()
        .env("GYM_STATE_DIR", temp.path())
        .env("GYM_OFFLINE", "1")
        .arg("init")
        .assert()
        .success();
    assert!(temp.path().join("gym.db").exists());
}

#[test]
fn corrupt_config_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "offline = [").unwrap();
    gym_in(temp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
