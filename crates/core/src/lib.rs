// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gym-core: local data layer for the gym coach roster tracker.
//!
//! This crate provides the roster data structures, the SQLite store, and the
//! durable log of changes waiting to reach the remote spreadsheet service.

pub mod change;
pub mod db;
pub mod error;
pub mod exercise;
pub mod goal;
pub mod jsonl;
pub mod month;
pub mod queue;
pub mod seed;
pub mod student;

pub use change::{ChangeKind, ChangePayload, PendingChange, StudentUpdate};
pub use db::{Record, Snapshot, Store};
pub use error::{Error, Result};
pub use exercise::Exercise;
pub use goal::{new_goal_id, Goal};
pub use month::{month_index, month_label_for, parse_month, Season, MONTHS};
pub use queue::PendingLog;
pub use seed::seed_snapshot;
pub use student::{ExerciseKind, MonthlyPerformance, Student};
