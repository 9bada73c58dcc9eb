// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};

use gym_core::{
    month_label_for, ChangePayload, Exercise, ExerciseKind, Goal, MonthlyPerformance,
    PendingChange, Season, Student,
};

/// Width of the name column in student listings.
const NAME_WIDTH: usize = 24;

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// One-line student summary.
///
/// ```text
/// [1] Иванов Петр              А-1
/// [5] Кузнецов Дмитрий         Б-2  (inactive)
/// ```
pub fn format_student_line(student: &Student) -> String {
    let mut line = format!(
        "[{}] {:<width$} {}",
        student.id,
        student.full_name(),
        student.group,
        width = NAME_WIDTH
    );
    if !student.is_active {
        line.push_str("  (inactive)");
    }
    line
}

/// Month-by-month counts, skipping months with nothing recorded. The row
/// for `current` is marked with `*`.
///
/// ```text
///   Month   Pull-ups  Push-ups  Dips
///   Сент          15        45    18
/// * Окт           18        50    20
/// ```
pub fn format_performance_table(
    performance: &[MonthlyPerformance],
    current: Option<&str>,
) -> Vec<String> {
    let recorded: Vec<&MonthlyPerformance> = performance
        .iter()
        .filter(|p| ExerciseKind::ALL.iter().any(|k| p.get(*k) > 0))
        .collect();
    if recorded.is_empty() {
        return vec!["  (no counts recorded)".to_string()];
    }

    let mut lines = vec![format!(
        "  {:<6} {:>9} {:>9} {:>5}",
        "Month", "Pull-ups", "Push-ups", "Dips"
    )];
    lines.extend(recorded.iter().map(|p| {
        let marker = if current == Some(p.month.as_str()) { '*' } else { ' ' };
        format!(
            "{marker} {:<6} {:>9} {:>9} {:>5}",
            p.month, p.pull_ups, p.push_ups, p.dips
        )
    }));
    lines
}

/// One-line goal summary with a completion box.
///
/// ```text
/// [x] goal-1  Иванов Петр: Выход силой на две (set 2024-09-01, done 2024-11-15)
/// [ ] goal-2  Сидоров Иван: Передний вис (Front Lever) (set 2024-10-01)
/// ```
pub fn format_goal_line(goal: &Goal) -> String {
    let mark = if goal.is_completed() { "x" } else { " " };
    let mut dates = format!("set {}", format_date(goal.set_date));
    if let Some(done) = goal.completion_date {
        dates.push_str(&format!(", done {}", format_date(done)));
    }
    format!(
        "[{}] {}  {}: {} ({})",
        mark, goal.id, goal.student_full_name, goal.exercise_name, dates
    )
}

/// Catalog line: id, name, then category and difficulty.
pub fn format_exercise_line(exercise: &Exercise) -> String {
    format!(
        "{:>3}  {:<32} {} / {}",
        exercise.id, exercise.name, exercise.category, exercise.difficulty
    )
}

/// Queued change: when, what and which entity.
pub fn format_change_line(change: &PendingChange) -> String {
    let detail = match &change.payload {
        ChangePayload::AthleteUpdate { student } => {
            format!("student {} (group {})", student.id, student.group)
        }
        ChangePayload::GoalAdd { goal } => {
            format!("goal {} for student {}", goal.id, goal.student_id)
        }
        ChangePayload::GoalComplete {
            goal_id,
            completed_at,
        } => format!("goal {} at {}", goal_id, format_date(*completed_at)),
        ChangePayload::GoalUncomplete { goal_id } | ChangePayload::GoalDelete { goal_id } => {
            format!("goal {goal_id}")
        }
    };
    format!(
        "{}  {:<15} {}",
        format_datetime(change.queued_at),
        change.kind().as_str(),
        detail
    )
}

/// Full student view with counts and goals.
pub fn format_student_details(student: &Student, goals: &[Goal], now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("[{}] {}", student.id, student.full_name()),
        format!("Group: {}", student.group),
        format!(
            "Status: {}",
            if student.is_active { "active" } else { "inactive" }
        ),
        format!("Since: {}", format_date(student.created_at)),
        format!("Updated: {}", format_datetime(student.updated_at)),
        format!(
            "Best: pull-ups {}, push-ups {}, dips {}",
            student.best(ExerciseKind::PullUps),
            student.best(ExerciseKind::PushUps),
            student.best(ExerciseKind::Dips)
        ),
        String::new(),
        format!("Season {}:", Season::containing(now).name()),
    ];
    lines.extend(format_performance_table(
        &student.performance,
        Some(month_label_for(now)),
    ));

    lines.push(String::new());
    lines.push("Goals:".to_string());
    if goals.is_empty() {
        lines.push("  (none)".to_string());
    }
    for goal in goals {
        lines.push(format!("  {}", format_goal_line(goal)));
        if !goal.notes.trim().is_empty() {
            lines.extend(goal.notes.lines().map(|l| format!("      {l}")));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
