// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping between local entities and the remote service's JSON shapes.
//!
//! Inbound rows come from a spreadsheet and are loosely typed: numbers may
//! arrive as strings, fields may be blank. Each field falls back to a
//! default instead of failing the row; only rows without a usable integer
//! id are skipped.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use gym_core::student::normalize_performance;
use gym_core::{
    new_goal_id, ChangePayload, Exercise, ExerciseKind, Goal, MonthlyPerformance, PendingChange,
    Student, StudentUpdate,
};

/// The affirmative token the spreadsheet uses for boolean columns.
const AFFIRMATIVE: &str = "да";

/// Format a timestamp the way the remote stores it.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let s = value?.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Parse an integer id from a number or numeric string.
fn parse_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a non-negative count; anything else is zero.
fn parse_count(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() && f > 0.0 => f.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn parse_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// `true` for boolean true or the affirmative string, else `false`.
pub fn parse_active(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().to_lowercase() == AFFIRMATIVE,
        _ => false,
    }
}

fn field<'a>(row: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .find(|v| !v.is_null())
}

fn performance_from_wire(value: Option<&Value>) -> Vec<MonthlyPerformance> {
    let records = value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|obj| {
                    let mut record = MonthlyPerformance::empty(&parse_text(obj.get("month")));
                    for kind in ExerciseKind::ALL {
                        record.set(kind, parse_count(obj.get(kind.label())));
                    }
                    record
                })
                .collect()
        })
        .unwrap_or_default();
    normalize_performance(records)
}

/// Map one inbound student row. `None` when the row has no usable id.
pub fn student_from_wire(row: &Value, now: DateTime<Utc>) -> Option<Student> {
    let row = row.as_object()?;
    let id = parse_id(row.get("id"))?;
    Some(Student {
        id,
        last_name: parse_text(row.get("lastName")),
        first_name: parse_text(row.get("firstName")),
        group: parse_text(row.get("group")),
        is_active: parse_active(row.get("isActive")),
        performance: performance_from_wire(row.get("performance")),
        created_at: parse_timestamp(row.get("createdAt")).unwrap_or(now),
        updated_at: parse_timestamp(row.get("updatedAt")).unwrap_or(now),
    })
}

/// Map one inbound exercise row. `None` when the row has no usable id.
pub fn exercise_from_wire(row: &Value) -> Option<Exercise> {
    let row = row.as_object()?;
    let id = parse_id(row.get("id"))?;
    let video_url = parse_text(row.get("videoUrl"));
    Some(Exercise {
        id,
        name: parse_text(row.get("name")),
        category: parse_text(row.get("category")),
        description: parse_text(row.get("description")),
        difficulty: parse_text(row.get("difficulty")),
        video_url: (!video_url.trim().is_empty()).then_some(video_url),
    })
}

/// Map one inbound goal row. A missing id is replaced by a fresh one.
pub fn goal_from_wire(row: &Value, now: DateTime<Utc>) -> Option<Goal> {
    let row = row.as_object()?;
    let id = parse_text(row.get("id"));
    let id = if id.trim().is_empty() {
        new_goal_id()
    } else {
        id
    };
    Some(Goal {
        id,
        student_id: parse_id(row.get("studentId")).unwrap_or_default(),
        student_full_name: parse_text(row.get("studentFullName")),
        exercise_id: parse_id(row.get("exerciseId")).unwrap_or_default(),
        exercise_name: parse_text(row.get("exerciseName")),
        set_date: parse_timestamp(field(row, &["dateSet", "setDate"])).unwrap_or(now),
        completion_date: parse_timestamp(field(row, &["dateCompleted", "completionDate"])),
        notes: parse_text(row.get("notes")),
    })
}

/// Map every row, skipping (and logging) the unusable ones.
pub fn map_rows<T>(
    rows: &[Value],
    kind: &'static str,
    map: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let mapped = map(row);
            if mapped.is_none() {
                tracing::warn!(kind, row = idx, "skipping remote row without a usable id");
            }
            mapped
        })
        .collect()
}

/// Outbound student shape: id, group and per-month labelled counts.
pub fn student_to_wire(student: &StudentUpdate) -> Value {
    let performance: Vec<Value> = student
        .performance
        .iter()
        .map(|p| {
            let mut obj = Map::new();
            obj.insert("month".to_string(), Value::from(p.month.clone()));
            for kind in ExerciseKind::ALL {
                obj.insert(kind.label().to_string(), Value::from(p.get(kind)));
            }
            Value::Object(obj)
        })
        .collect();
    json!({
        "id": student.id,
        "group": student.group,
        "performance": performance,
    })
}

/// Outbound goal shape used by `addGoal`.
pub fn goal_to_wire(goal: &Goal) -> Value {
    json!({
        "id": goal.id,
        "studentId": goal.student_id,
        "exerciseId": goal.exercise_id,
        "dateSet": format_timestamp(goal.set_date),
        "dateCompleted": goal.completion_date.map(format_timestamp),
        "notes": goal.notes,
    })
}

/// The write action and parameters for a pending change.
pub fn change_request(change: &PendingChange) -> (&'static str, Value) {
    match &change.payload {
        ChangePayload::AthleteUpdate { student } => (
            "updateStudent",
            json!({ "studentData": student_to_wire(student) }),
        ),
        ChangePayload::GoalAdd { goal } => ("addGoal", json!({ "goalData": goal_to_wire(goal) })),
        ChangePayload::GoalComplete {
            goal_id,
            completed_at,
        } => (
            "updateGoal",
            json!({ "goalData": { "id": goal_id, "dateCompleted": format_timestamp(*completed_at) } }),
        ),
        ChangePayload::GoalUncomplete { goal_id } => (
            "updateGoal",
            json!({ "goalData": { "id": goal_id, "dateCompleted": Value::Null } }),
        ),
        ChangePayload::GoalDelete { goal_id } => ("deleteGoal", json!({ "goalId": goal_id })),
    }
}

/// Full POST body for a pending change.
pub fn change_body(change: &PendingChange) -> Value {
    let (action, params) = change_request(change);
    json!({ "action": action, "params": params })
}
