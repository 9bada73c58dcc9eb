// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_students_default() {
    let cli = parse(&["gym-coach", "students"]).unwrap();
    match cli.command {
        Command::Students { filter, .. } => {
            assert!(filter.group.is_none());
            assert!(filter.search.is_none());
            assert!(!filter.active);
        }
        _ => panic!("Expected Students command"),
    }
}

#[test]
fn test_students_filters() {
    let cli = parse(&[
        "gym-coach", "students", "-g", "А-1", "--search", "иван", "--active",
    ])
    .unwrap();
    match cli.command {
        Command::Students { filter, .. } => {
            assert_eq!(filter.group.as_deref(), Some("А-1"));
            assert_eq!(filter.search.as_deref(), Some("иван"));
            assert!(filter.active);
        }
        _ => panic!("Expected Students command"),
    }
}

#[test]
fn test_show_requires_numeric_id() {
    assert!(parse(&["gym-coach", "show", "abc"]).is_err());
    let cli = parse(&["gym-coach", "show", "3"]).unwrap();
    assert!(matches!(cli.command, Command::Show { id: 3, .. }));
}

#[test]
fn test_set_group() {
    let cli = parse(&["gym-coach", "set-group", "2", "Б-2"]).unwrap();
    match cli.command {
        Command::SetGroup { id, group } => {
            assert_eq!(id, 2);
            assert_eq!(group, "Б-2");
        }
        _ => panic!("Expected SetGroup command"),
    }
}

#[test]
fn test_set_group_rejects_blank() {
    assert!(parse(&["gym-coach", "set-group", "2", "  "]).is_err());
}

#[parameterized(
    ascii = { "pullups", ExerciseKind::PullUps },
    dashed = { "push-ups", ExerciseKind::PushUps },
    label = { "Брусья", ExerciseKind::Dips },
)]
fn test_record_exercise(input: &str, expected: ExerciseKind) {
    let cli = parse(&["gym-coach", "record", "1", "Окт", input, "18"]).unwrap();
    match cli.command {
        Command::Record {
            id,
            month,
            exercise,
            count,
        } => {
            assert_eq!(id, 1);
            assert_eq!(month, "Окт");
            assert_eq!(exercise, expected);
            assert_eq!(count, 18);
        }
        _ => panic!("Expected Record command"),
    }
}

#[test]
fn test_record_rejects_unknown_exercise() {
    assert!(parse(&["gym-coach", "record", "1", "Окт", "squats", "5"]).is_err());
}

#[test]
fn test_record_rejects_negative_count() {
    assert!(parse(&["gym-coach", "record", "1", "Окт", "dips", "-1"]).is_err());
}
