// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-student goals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exercise::Exercise;
use crate::student::Student;

/// A goal set for a student on a catalog exercise.
///
/// `student_full_name` and `exercise_name` are copied when the goal is
/// created and are not kept in step with later renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub student_id: i64,
    pub student_full_name: String,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub set_date: DateTime<Utc>,
    pub completion_date: Option<DateTime<Utc>>,
    pub notes: String,
}

impl Goal {
    /// Build an open goal with a fresh id, snapshotting display names.
    pub fn for_student(
        student: &Student,
        exercise: &Exercise,
        set_date: DateTime<Utc>,
        notes: impl Into<String>,
    ) -> Self {
        Goal {
            id: new_goal_id(),
            student_id: student.id,
            student_full_name: student.full_name(),
            exercise_id: exercise.id,
            exercise_name: exercise.name.clone(),
            set_date,
            completion_date: None,
            notes: notes.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completion_date.is_some()
    }
}

/// A globally unique goal id.
pub fn new_goal_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
#[path = "goal_tests.rs"]
mod tests;
