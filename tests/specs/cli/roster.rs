// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for roster reads and student edits.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn students_lists_seeded_roster() {
    let temp = init_temp();
    gym_in(temp.path())
        .arg("students")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Иванов Петр"))
        .stdout(predicate::str::contains("[5] Кузнецов Дмитрий"))
        .stdout(predicate::str::contains("(inactive)"));
}

#[parameterized(
    group = { &["--group", "А-1"], 2 },
    active = { &["--active"], 4 },
    search = { &["--search", "сергей"], 1 },
    nothing = { &["--group", "Я-9"], 0 },
)]
fn students_filters(args: &[&str], expected: usize) {
    let temp = init_temp();
    let mut full = vec!["students"];
    full.extend_from_slice(args);
    let students = json_output(temp.path(), &full);
    assert_eq!(students.as_array().unwrap().len(), expected);
}

#[test]
fn show_includes_goals_and_counts() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group: А-1"))
        .stdout(predicate::str::contains("Pull-ups"))
        .stdout(predicate::str::contains("goal-1"))
        .stdout(predicate::str::contains("goal-2"));
}

#[test]
fn show_unknown_student_fails() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("student not found: 99"));
}

#[test]
fn groups_are_sorted_and_distinct() {
    let temp = init_temp();
    let groups = json_output(temp.path(), &["groups"]);
    assert_eq!(groups, serde_json::json!(["А-1", "Б-2", "В-3"]));
}

#[test]
fn exercises_lists_catalog() {
    let temp = init_temp();
    let exercises = json_output(temp.path(), &["exercises"]);
    let ids: Vec<i64> = exercises
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 5, 12, 15, 16]);
}

#[test]
fn set_group_is_visible_and_queued() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["set-group", "5", "В-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved Кузнецов Дмитрий to group В-3"));

    let student = json_output(temp.path(), &["show", "5"]);
    assert_eq!(student["group"], "В-3");
    assert_eq!(pending_count(temp.path()), 1);
}

#[test]
fn record_updates_month() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["record", "2", "Окт", "pullups", "33"])
        .assert()
        .success();

    let student = json_output(temp.path(), &["show", "2"]);
    let october = &student["performance"][1];
    assert_eq!(october["month"], "Окт");
    assert_eq!(october["pull_ups"], 33);
    assert_eq!(pending_count(temp.path()), 1);
}

#[test]
fn record_rejects_bad_month() {
    let temp = init_temp();
    gym_in(temp.path())
        .args(["record", "2", "Smarch", "dips", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid month"));
    assert_eq!(pending_count(temp.path()), 0);
}
