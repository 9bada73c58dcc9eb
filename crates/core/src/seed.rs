// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in starter roster.
//!
//! Used to populate an empty store when the remote cannot be reached on
//! first start.

use chrono::{DateTime, TimeZone, Utc};

use crate::db::Snapshot;
use crate::exercise::Exercise;
use crate::goal::Goal;
use crate::month::MONTHS;
use crate::student::{MonthlyPerformance, Student};

struct SeedStudent {
    id: i64,
    last_name: &'static str,
    first_name: &'static str,
    group: &'static str,
    is_active: bool,
    pull_ups: [u32; 12],
    push_ups: [u32; 12],
    dips: [u32; 12],
    created: (i32, u32, u32),
}

const STUDENTS: [SeedStudent; 5] = [
    SeedStudent {
        id: 1,
        last_name: "Иванов",
        first_name: "Петр",
        group: "А-1",
        is_active: true,
        pull_ups: [15, 18, 20, 22, 19, 21, 23, 24, 22, 20, 18, 16],
        push_ups: [45, 50, 52, 55, 53, 54, 56, 58, 57, 55, 50, 48],
        dips: [18, 20, 22, 24, 23, 25, 26, 27, 26, 24, 22, 20],
        created: (2023, 9, 1),
    },
    SeedStudent {
        id: 2,
        last_name: "Сидоров",
        first_name: "Иван",
        group: "А-1",
        is_active: true,
        pull_ups: [10, 12, 14, 15, 13, 14, 16, 17, 16, 15, 13, 12],
        push_ups: [30, 35, 38, 40, 38, 39, 41, 43, 42, 40, 38, 35],
        dips: [12, 15, 17, 18, 17, 18, 19, 20, 19, 18, 16, 15],
        created: (2023, 9, 1),
    },
    SeedStudent {
        id: 3,
        last_name: "Петров",
        first_name: "Алексей",
        group: "Б-2",
        is_active: true,
        pull_ups: [8, 10, 12, 13, 11, 12, 14, 15, 14, 13, 11, 10],
        push_ups: [25, 28, 30, 32, 30, 31, 33, 35, 34, 32, 30, 28],
        dips: [8, 10, 12, 13, 12, 13, 14, 15, 14, 13, 11, 10],
        created: (2024, 1, 15),
    },
    SeedStudent {
        id: 4,
        last_name: "Смирнов",
        first_name: "Сергей",
        group: "В-3",
        is_active: true,
        pull_ups: [20, 22, 24, 25, 23, 24, 26, 27, 26, 25, 23, 22],
        push_ups: [60, 65, 68, 70, 68, 69, 71, 73, 72, 70, 68, 65],
        dips: [25, 28, 30, 32, 30, 31, 33, 35, 34, 32, 30, 28],
        created: (2022, 9, 1),
    },
    SeedStudent {
        id: 5,
        last_name: "Кузнецов",
        first_name: "Дмитрий",
        group: "Б-2",
        is_active: false,
        pull_ups: [5, 6, 7, 8, 7, 7, 8, 9, 8, 8, 7, 6],
        push_ups: [20, 22, 24, 25, 24, 24, 25, 26, 25, 24, 23, 22],
        dips: [5, 7, 8, 9, 8, 9, 10, 11, 10, 9, 8, 7],
        created: (2023, 9, 1),
    },
];

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn student(seed: &SeedStudent, now: DateTime<Utc>) -> Student {
    let performance = MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| MonthlyPerformance {
            month: month.to_string(),
            pull_ups: seed.pull_ups[i],
            push_ups: seed.push_ups[i],
            dips: seed.dips[i],
        })
        .collect();
    let (y, m, d) = seed.created;
    Student {
        id: seed.id,
        last_name: seed.last_name.to_string(),
        first_name: seed.first_name.to_string(),
        group: seed.group.to_string(),
        is_active: seed.is_active,
        performance,
        created_at: date(y, m, d),
        updated_at: now,
    }
}

fn exercise(
    id: i64,
    name: &str,
    category: &str,
    description: &str,
    difficulty: &str,
) -> Exercise {
    Exercise {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        video_url: None,
    }
}

fn exercises() -> Vec<Exercise> {
    vec![
        exercise(1, "Подтягивания прямым хватом", "Турник", "Классические подтягивания", "Начальный"),
        exercise(
            3,
            "Выход силой на две",
            "Турник",
            "Взрывной подъем корпуса над перекладиной",
            "Продвинутый",
        ),
        exercise(
            5,
            "Передний вис (Front Lever)",
            "Турник",
            "Удержание тела параллельно земле лицом вверх",
            "Элитный",
        ),
        exercise(
            12,
            "Отжимания на брусьях",
            "Брусья",
            "Опускание и подъем тела на параллельных брусьях",
            "Средний",
        ),
        exercise(
            15,
            "Горизонт (Planche)",
            "Брусья",
            "Горизонтальное удержание тела на брусьях",
            "Элитный",
        ),
        exercise(
            16,
            "Спичаг",
            "Акробатика",
            "Выход в стойку на руках из положения сидя",
            "Продвинутый",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn goal(
    id: &str,
    student_id: i64,
    student_full_name: &str,
    exercise_id: i64,
    exercise_name: &str,
    set_date: DateTime<Utc>,
    completion_date: Option<DateTime<Utc>>,
    notes: &str,
) -> Goal {
    Goal {
        id: id.to_string(),
        student_id,
        student_full_name: student_full_name.to_string(),
        exercise_id,
        exercise_name: exercise_name.to_string(),
        set_date,
        completion_date,
        notes: notes.to_string(),
    }
}

fn goals() -> Vec<Goal> {
    vec![
        goal(
            "goal-1",
            1,
            "Иванов Петр",
            3,
            "Выход силой на две",
            date(2024, 9, 1),
            Some(date(2024, 10, 15)),
            "Отлично выполнено!",
        ),
        goal(
            "goal-2",
            1,
            "Иванов Петр",
            5,
            "Передний вис (Front Lever)",
            date(2024, 10, 20),
            None,
            "В процессе обучения",
        ),
        goal(
            "goal-3",
            2,
            "Сидоров Иван",
            16,
            "Спичаг",
            date(2024, 9, 10),
            None,
            "Требует работы над гибкостью",
        ),
        goal(
            "goal-4",
            3,
            "Петров Алексей",
            12,
            "Отжимания на брусьях",
            date(2024, 1, 20),
            Some(date(2024, 3, 15)),
            "Хороший прогресс",
        ),
        goal(
            "goal-5",
            4,
            "Смирнов Сергей",
            15,
            "Горизонт (Planche)",
            date(2024, 8, 1),
            None,
            "Сильный ученик, есть потенциал",
        ),
    ]
}

/// The starter roster: five students, six exercises and five goals.
///
/// Every student's `updated_at` is set to `now`.
pub fn seed_snapshot(now: DateTime<Utc>) -> Snapshot {
    Snapshot {
        students: STUDENTS.iter().map(|s| student(s, now)).collect(),
        exercises: exercises(),
        goals: goals(),
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
