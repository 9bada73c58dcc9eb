// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote client for the spreadsheet web app.
//!
//! Reads fetch whole tables; writes push one pending change at a time.
//! Every response is wrapped in a `{success, data?, error?}` envelope.

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use gym_core::{Exercise, Goal, PendingChange, Snapshot, Student};

use super::transport::{HttpTransport, Transport, TransportError};
use super::wire;

/// Error type for remote reads.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered `success: false`.
    #[error("remote rejected request: {0}")]
    Rejected(String),

    /// The envelope did not carry the expected table.
    #[error("malformed response: missing data.{0}")]
    MissingData(&'static str),

    /// The body was not an envelope at all.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type for remote reads.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Outcome of pushing one change. Never an error: the caller decides what
/// to do with failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The remote applied the change.
    Accepted,
    /// The remote answered `success: false`.
    Rejected { message: String },
    /// Network, HTTP or parse failure.
    Failed { message: String },
}

impl PushOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PushOutcome::Accepted)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl Envelope {
    fn parse(body: Value) -> RemoteResult<Self> {
        serde_json::from_value(body).map_err(|e| RemoteError::Malformed(e.to_string()))
    }

    fn rejection(&self) -> String {
        self.error
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "unknown error".to_string())
    }

    /// The `data.<key>` array of a successful read.
    fn into_rows(self, key: &'static str) -> RemoteResult<Vec<Value>> {
        if !self.success {
            return Err(RemoteError::Rejected(self.rejection()));
        }
        match self.data {
            Some(Value::Object(mut data)) => match data.remove(key) {
                Some(Value::Array(rows)) => Ok(rows),
                _ => Err(RemoteError::MissingData(key)),
            },
            _ => Err(RemoteError::MissingData(key)),
        }
    }
}

/// Client for the remote service, generic over its transport.
pub struct RemoteClient<T: Transport = HttpTransport> {
    transport: T,
}

impl<T: Transport> RemoteClient<T> {
    /// Create a client over the given transport.
    pub fn with_transport(transport: T) -> Self {
        RemoteClient { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch_rows(&self, action: &str, key: &'static str) -> RemoteResult<Vec<Value>> {
        let body = self.transport.get(action).await?;
        Envelope::parse(body)?.into_rows(key)
    }

    pub async fn fetch_all_students(&self) -> RemoteResult<Vec<Student>> {
        let rows = self.fetch_rows("getAllStudents", "students").await?;
        let now = Utc::now();
        Ok(wire::map_rows(&rows, "student", |r| {
            wire::student_from_wire(r, now)
        }))
    }

    pub async fn fetch_exercises(&self) -> RemoteResult<Vec<Exercise>> {
        let rows = self.fetch_rows("getExercises", "exercises").await?;
        Ok(wire::map_rows(&rows, "exercise", wire::exercise_from_wire))
    }

    pub async fn fetch_goals(&self) -> RemoteResult<Vec<Goal>> {
        let rows = self.fetch_rows("getGoals", "goals").await?;
        let now = Utc::now();
        Ok(wire::map_rows(&rows, "goal", |r| wire::goal_from_wire(r, now)))
    }

    /// Fetch all three tables. Any failure fails the whole snapshot.
    pub async fn fetch_snapshot(&self) -> RemoteResult<Snapshot> {
        let students = self.fetch_all_students().await?;
        let exercises = self.fetch_exercises().await?;
        let goals = self.fetch_goals().await?;
        Ok(Snapshot {
            students,
            exercises,
            goals,
        })
    }

    /// Push one pending change with its matching write action.
    pub async fn push_change(&self, change: &PendingChange) -> PushOutcome {
        let body = wire::change_body(change);
        let response = match self.transport.post(body).await {
            Ok(response) => response,
            Err(e) => {
                return PushOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };
        match Envelope::parse(response) {
            Ok(envelope) if envelope.success => PushOutcome::Accepted,
            Ok(envelope) => PushOutcome::Rejected {
                message: envelope.rejection(),
            },
            Err(e) => PushOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}
