// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for goal listing and goal edits.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

fn goal_ids(goals: &serde_json::Value) -> Vec<String> {
    goals
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn goals_lists_all_and_per_student() {
    let temp = init_temp();
    assert_eq!(goal_ids(&json_output(temp.path(), &["goals"])).len(), 5);
    assert_eq!(
        goal_ids(&json_output(temp.path(), &["goals", "1"])),
        vec!["goal-1", "goal-2"]
    );
    assert_eq!(
        goal_ids(&json_output(temp.path(), &["goals", "--open"])),
        vec!["goal-2", "goal-3", "goal-5"]
    );
}

#[test]
fn goals_text_marks_completed() {
    let temp = init_temp();
    gym_in(temp.path())
        .arg("goals")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] goal-1"))
        .stdout(predicate::str::contains("[ ] goal-2"));
}

#[test]
fn goal_add_snapshots_names() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["goal", "add", "3", "16", "--notes", "Гибкость"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Спичаг for Петров Алексей"));

    let goals = json_output(temp.path(), &["goals", "3"]);
    let added = goals
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["exercise_id"] == 16)
        .unwrap();
    assert_eq!(added["student_full_name"], "Петров Алексей");
    assert_eq!(added["notes"], "Гибкость");
    assert!(added["completion_date"].is_null());
    assert_eq!(pending_count(temp.path()), 1);
}

#[test]
fn goal_add_unknown_exercise_fails() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["goal", "add", "3", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exercise not found: 999"));
    assert_eq!(pending_count(temp.path()), 0);
}

#[test]
fn goal_complete_queues_one_change_with_timestamp() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["goal", "complete", "goal-2", "--date", "2024-12-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed goal goal-2 on 2024-12-01"));

    let pending = json_output(temp.path(), &["pending"]);
    let changes = pending.as_array().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["kind"], "goal-complete");
    assert_eq!(changes[0]["goal_id"], "goal-2");
    assert!(changes[0]["completed_at"]
        .as_str()
        .unwrap()
        .starts_with("2024-12-01T00:00:00"));
}

#[test]
fn goal_reopen_and_delete() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["goal", "reopen", "goal-1"])
        .assert()
        .success();
    gym_in(temp.path())
        .args(["goal", "delete", "goal-4"])
        .assert()
        .success();

    let ids = goal_ids(&json_output(temp.path(), &["goals", "--open"]));
    assert!(ids.contains(&"goal-1".to_string()));
    assert!(!ids.contains(&"goal-4".to_string()));
    assert_eq!(pending_count(temp.path()), 2);
}

#[test]
fn goal_complete_bad_date_fails() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["goal", "complete", "goal-2", "--date", "01/12/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}
