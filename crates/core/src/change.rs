// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending changes: local mutations not yet confirmed by the remote.
//!
//! Each change carries everything needed to replay it against the remote
//! service without reading local state again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::goal::Goal;
use crate::student::{MonthlyPerformance, Student};

/// The kind of a pending change, as shown to users and in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    AthleteUpdate,
    GoalAdd,
    GoalComplete,
    GoalUncomplete,
    GoalDelete,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::AthleteUpdate => "athlete-update",
            ChangeKind::GoalAdd => "goal-add",
            ChangeKind::GoalComplete => "goal-complete",
            ChangeKind::GoalUncomplete => "goal-uncomplete",
            ChangeKind::GoalDelete => "goal-delete",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The mutable slice of a student that the remote accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub id: i64,
    pub group: String,
    pub performance: Vec<MonthlyPerformance>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Student> for StudentUpdate {
    fn from(student: &Student) -> Self {
        StudentUpdate {
            id: student.id,
            group: student.group.clone(),
            performance: student.performance.clone(),
            updated_at: student.updated_at,
        }
    }
}

/// What a pending change does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChangePayload {
    AthleteUpdate { student: StudentUpdate },
    GoalAdd { goal: Goal },
    GoalComplete {
        goal_id: String,
        completed_at: DateTime<Utc>,
    },
    GoalUncomplete { goal_id: String },
    GoalDelete { goal_id: String },
}

impl ChangePayload {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangePayload::AthleteUpdate { .. } => ChangeKind::AthleteUpdate,
            ChangePayload::GoalAdd { .. } => ChangeKind::GoalAdd,
            ChangePayload::GoalComplete { .. } => ChangeKind::GoalComplete,
            ChangePayload::GoalUncomplete { .. } => ChangeKind::GoalUncomplete,
            ChangePayload::GoalDelete { .. } => ChangeKind::GoalDelete,
        }
    }

    /// Id of the entity the change targets, for display.
    pub fn target(&self) -> String {
        match self {
            ChangePayload::AthleteUpdate { student } => student.id.to_string(),
            ChangePayload::GoalAdd { goal } => goal.id.clone(),
            ChangePayload::GoalComplete { goal_id, .. }
            | ChangePayload::GoalUncomplete { goal_id }
            | ChangePayload::GoalDelete { goal_id } => goal_id.clone(),
        }
    }
}

/// One entry of the pending change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChange {
    pub id: String,
    pub queued_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: ChangePayload,
}

impl PendingChange {
    /// Wrap a payload with a fresh id and the current time.
    pub fn new(payload: ChangePayload) -> Self {
        PendingChange {
            id: uuid::Uuid::new_v4().to_string(),
            queued_at: Utc::now(),
            payload,
        }
    }

    pub fn athlete_update(student: &Student) -> Self {
        Self::new(ChangePayload::AthleteUpdate {
            student: student.into(),
        })
    }

    pub fn goal_add(goal: &Goal) -> Self {
        Self::new(ChangePayload::GoalAdd { goal: goal.clone() })
    }

    /// A completion toggle: `Some` completes, `None` reopens.
    pub fn goal_completion(goal_id: &str, completed_at: Option<DateTime<Utc>>) -> Self {
        let goal_id = goal_id.to_string();
        Self::new(match completed_at {
            Some(completed_at) => ChangePayload::GoalComplete {
                goal_id,
                completed_at,
            },
            None => ChangePayload::GoalUncomplete { goal_id },
        })
    }

    pub fn goal_delete(goal_id: &str) -> Self {
        Self::new(ChangePayload::GoalDelete {
            goal_id: goal_id.to_string(),
        })
    }

    pub fn kind(&self) -> ChangeKind {
        self.payload.kind()
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
