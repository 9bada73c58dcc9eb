// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gym-core operations.

use thiserror::Error;

/// All possible errors that can occur in gym-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("local storage unavailable: {0}\n  hint: check that the state directory exists and is writable")]
    StorageUnavailable(String),

    #[error("duplicate key in {table}: {id}")]
    DuplicateKey { table: &'static str, id: String },

    #[error("student not found: {0}")]
    StudentNotFound(i64),

    #[error("exercise not found: {0}")]
    ExerciseNotFound(i64),

    #[error("goal not found: {0}")]
    GoalNotFound(String),

    #[error("invalid month: '{0}'\n  hint: valid months are: Сент, Окт, Нояб, Дек, Янв, Фев, Мар, Апр, Май, Июн, Июл, Авг")]
    InvalidMonth(String),

    #[error("invalid exercise: '{0}'\n  hint: valid exercises are: pullups, pushups, dips")]
    InvalidExercise(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for gym-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
