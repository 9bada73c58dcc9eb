// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sync`, `status` and `pending`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn sync_offline_fails_with_offline_message() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["set-group", "1", "Б-2"])
        .assert()
        .success();

    gym_in(temp.path())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: offline"));

    assert_eq!(pending_count(temp.path()), 1);
}

#[test]
fn sync_without_remote_asks_for_one() {
    let temp = TempDir::new().unwrap();
    gym()
        .arg("-C")
        .arg(temp.path())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no remote configured"));
}

#[test]
fn sync_unreachable_remote_is_offline() {
    // Bind then drop to find a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let temp = TempDir::new().unwrap();
    let url = format!("http://127.0.0.1:{port}/exec");

    gym()
        .arg("-C")
        .arg(temp.path())
        .args(["init", "--remote-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded built-in roster"));

    gym()
        .arg("-C")
        .arg(temp.path())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("offline"));
}

#[test]
fn status_reports_pending_count() {
    let temp = init_temp();
    let status = json_output(temp.path(), &["status"]);
    assert_eq!(status["pending"], 0);
    assert_eq!(status["state"], "ready");
    assert!(status["last_sync"].is_null());

    gym_in(temp.path())
        .args(["set-group", "2", "В-3"])
        .assert()
        .success();
    gym_in(temp.path())
        .args(["record", "2", "Окт", "dips", "20"])
        .assert()
        .success();

    let status = json_output(temp.path(), &["status"]);
    assert_eq!(status["pending"], 2);
    assert_eq!(status["students"], 5);

    gym_in(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending changes: 2"))
        .stdout(predicate::str::contains("Last sync: never"))
        .stdout(predicate::str::contains("Remote: not configured"));
}

#[test]
fn pending_lists_changes_in_order() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["set-group", "2", "В-3"])
        .assert()
        .success();
    gym_in(temp.path())
        .args(["goal", "delete", "goal-5"])
        .assert()
        .success();

    let kinds: Vec<String> = json_output(temp.path(), &["pending"])
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["athlete-update", "goal-delete"]);

    gym_in(temp.path())
        .arg("pending")
        .assert()
        .success()
        .stdout(predicate::str::contains("athlete-update"))
        .stdout(predicate::str::contains("goal goal-5"));
}

#[test]
fn pending_empty_message() {
    let temp = init_temp();
    gym_in(temp.path())
        .arg("pending")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending changes."));
}

#[test]
fn completions_need_no_state() {
    gym()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gym-coach"));
}
