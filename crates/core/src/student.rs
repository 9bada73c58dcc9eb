// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Students and their monthly exercise counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::month::{month_index, MONTHS, MONTH_COUNT};

/// The exercises tracked month by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    PullUps,
    PushUps,
    Dips,
}

impl ExerciseKind {
    /// All kinds in display order.
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::PullUps,
        ExerciseKind::PushUps,
        ExerciseKind::Dips,
    ];

    /// The localized label used as a key in the remote spreadsheet.
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::PullUps => "Подтягивания",
            ExerciseKind::PushUps => "Отжимания",
            ExerciseKind::Dips => "Брусья",
        }
    }

    /// Short ASCII name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::PullUps => "pullups",
            ExerciseKind::PushUps => "pushups",
            ExerciseKind::Dips => "dips",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(kind) = ExerciseKind::ALL.iter().find(|k| k.label() == trimmed) {
            return Ok(*kind);
        }
        match trimmed.to_lowercase().replace(['-', '_'], "").as_str() {
            "pullups" => Ok(ExerciseKind::PullUps),
            "pushups" => Ok(ExerciseKind::PushUps),
            "dips" => Ok(ExerciseKind::Dips),
            _ => Err(Error::InvalidExercise(s.to_string())),
        }
    }
}

/// Counts recorded for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub pull_ups: u32,
    pub push_ups: u32,
    pub dips: u32,
}

impl MonthlyPerformance {
    /// A month with no recorded counts.
    pub fn empty(month: &str) -> Self {
        MonthlyPerformance {
            month: month.to_string(),
            pull_ups: 0,
            push_ups: 0,
            dips: 0,
        }
    }

    pub fn get(&self, kind: ExerciseKind) -> u32 {
        match kind {
            ExerciseKind::PullUps => self.pull_ups,
            ExerciseKind::PushUps => self.push_ups,
            ExerciseKind::Dips => self.dips,
        }
    }

    pub fn set(&mut self, kind: ExerciseKind, count: u32) {
        match kind {
            ExerciseKind::PullUps => self.pull_ups = count,
            ExerciseKind::PushUps => self.push_ups = count,
            ExerciseKind::Dips => self.dips = count,
        }
    }
}

/// A full year of zeroed records in canonical order.
pub fn empty_performance() -> Vec<MonthlyPerformance> {
    MONTHS.iter().map(|m| MonthlyPerformance::empty(m)).collect()
}

/// Bring records into canonical shape: one per month, in canonical order.
///
/// Unknown month labels are dropped, missing months are zero-filled, and
/// when a month appears twice the last record wins.
pub fn normalize_performance(records: Vec<MonthlyPerformance>) -> Vec<MonthlyPerformance> {
    let mut out = empty_performance();
    for record in records {
        if let Some(idx) = month_index(&record.month) {
            out[idx] = MonthlyPerformance {
                month: MONTHS[idx].to_string(),
                ..record
            };
        }
    }
    out
}

/// A student on the coach's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub group: String,
    pub is_active: bool,
    pub performance: Vec<MonthlyPerformance>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Creates an active student with an empty performance year.
    pub fn new(
        id: i64,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        group: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Student {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            group: group.into(),
            is_active: true,
            performance: empty_performance(),
            created_at: now,
            updated_at: now,
        }
    }

    /// "Last First", the form goal snapshots use.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// All-time best monthly count for `kind`.
    pub fn best(&self, kind: ExerciseKind) -> u32 {
        self.performance
            .iter()
            .map(|p| p.get(kind))
            .max()
            .unwrap_or(0)
    }

    /// Set one month's count for one exercise.
    ///
    /// Normalizes the performance year first so the month slot exists.
    pub fn record(&mut self, month: &str, kind: ExerciseKind, count: u32) -> Result<()> {
        let idx = month_index(month).ok_or_else(|| Error::InvalidMonth(month.to_string()))?;
        if self.performance.len() != MONTH_COUNT {
            self.performance = normalize_performance(std::mem::take(&mut self.performance));
        }
        self.performance[idx].set(kind, count);
        Ok(())
    }

    /// Case-insensitive match on "First Last".
    pub fn matches_name(&self, query: &str) -> bool {
        let haystack = format!("{} {}", self.first_name, self.last_name).to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
