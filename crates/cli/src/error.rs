// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::{SyncError, TransportError};

/// All possible errors that can occur in the gym-coach CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] gym_core::Error),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("no remote configured\n  hint: run 'gym-coach init --remote-url <url>' or set GYM_REMOTE_URL")]
    NoRemote,

    #[error("state directory is in use: {0}\n  hint: another gym-coach command is running")]
    StateLocked(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("remote client error: {0}")]
    Remote(#[from] TransportError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for gym-coach operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
