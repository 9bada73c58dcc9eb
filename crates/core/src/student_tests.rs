// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn sample() -> Student {
    Student::new(7, "Иванов", "Петр", "А-1", Utc::now())
}

#[parameterized(
    label_pullups = { "Подтягивания", ExerciseKind::PullUps },
    label_dips = { "Брусья", ExerciseKind::Dips },
    ascii = { "pushups", ExerciseKind::PushUps },
    dashed = { "pull-ups", ExerciseKind::PullUps },
    upper = { "DIPS", ExerciseKind::Dips },
)]
fn exercise_kind_from_str(input: &str, expected: ExerciseKind) {
    assert_eq!(input.parse::<ExerciseKind>().unwrap(), expected);
}

#[test]
fn exercise_kind_rejects_unknown() {
    assert!(matches!(
        "squats".parse::<ExerciseKind>(),
        Err(Error::InvalidExercise(_))
    ));
}

#[test]
fn new_student_has_full_empty_year() {
    let student = sample();
    assert_eq!(student.performance.len(), 12);
    assert_eq!(student.performance[0].month, "Сент");
    assert!(student.is_active);
    assert_eq!(student.best(ExerciseKind::PullUps), 0);
}

#[test]
fn full_name_is_last_then_first() {
    assert_eq!(sample().full_name(), "Иванов Петр");
}

#[test]
fn record_updates_single_cell() {
    let mut student = sample();
    student.record("Окт", ExerciseKind::Dips, 14).unwrap();

    assert_eq!(student.performance[1].dips, 14);
    assert_eq!(student.performance[1].pull_ups, 0);
    assert_eq!(student.best(ExerciseKind::Dips), 14);
}

#[test]
fn record_rejects_unknown_month() {
    let mut student = sample();
    let err = student.record("Oct", ExerciseKind::Dips, 1).unwrap_err();
    assert!(matches!(err, Error::InvalidMonth(_)));
}

#[test]
fn record_repairs_short_performance() {
    let mut student = sample();
    student.performance.truncate(3);
    student.record("Авг", ExerciseKind::PushUps, 40).unwrap();

    assert_eq!(student.performance.len(), 12);
    assert_eq!(student.performance[11].push_ups, 40);
}

#[test]
fn normalize_orders_and_fills() {
    let mut late = MonthlyPerformance::empty("Май");
    late.pull_ups = 9;
    let mut early = MonthlyPerformance::empty("Сент");
    early.pull_ups = 3;
    let junk = MonthlyPerformance::empty("Smarch");

    let out = normalize_performance(vec![late, junk, early]);

    assert_eq!(out.len(), 12);
    assert_eq!(out[0].pull_ups, 3);
    assert_eq!(out[8].month, "Май");
    assert_eq!(out[8].pull_ups, 9);
    assert_eq!(out[1].pull_ups, 0);
}

#[test]
fn matches_name_ignores_case() {
    let student = sample();
    assert!(student.matches_name("петр"));
    assert!(student.matches_name("Петр Иванов"));
    assert!(!student.matches_name("Сидоров"));
}
