// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    student_not_found = { Error::StudentNotFound(42), "42" },
    goal_not_found = { Error::GoalNotFound("goal-9".into()), "goal-9" },
    invalid_month = { Error::InvalidMonth("Sept".into()), "Sept" },
    invalid_exercise = { Error::InvalidExercise("squats".into()), "squats" },
    storage = { Error::StorageUnavailable("read-only".into()), "unavailable" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn duplicate_key_names_table_and_id() {
    let err = Error::DuplicateKey {
        table: "goals",
        id: "goal-1".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("goals"));
    assert!(msg.contains("goal-1"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
