// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed persistent store for students, exercises and goals.
//!
//! The [`Store`] is the local source of truth for reads. Entity tables are
//! addressed generically through the [`Record`] trait; a single-row `meta`
//! table holds the last-sync timestamp.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::change::{ChangePayload, PendingChange};
use crate::error::{Error, Result};
use crate::exercise::Exercise;
use crate::goal::Goal;
use crate::student::{normalize_performance, MonthlyPerformance, Student};

/// SQL schema for the roster database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    last_name TEXT NOT NULL,
    first_name TEXT NOT NULL,
    group_name TEXT NOT NULL,
    is_active INTEGER NOT NULL,
    performance TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    difficulty TEXT NOT NULL,
    video_url TEXT
);

-- Goals carry display snapshots, so no foreign keys: a download may
-- deliver goals for students that are not (yet) on the roster.
CREATE TABLE IF NOT EXISTS goals (
    id TEXT PRIMARY KEY,
    student_id INTEGER NOT NULL,
    student_full_name TEXT NOT NULL,
    exercise_id INTEGER NOT NULL,
    exercise_name TEXT NOT NULL,
    set_date TEXT NOT NULL,
    completion_date TEXT,
    notes TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT
);

CREATE INDEX IF NOT EXISTS idx_goals_student ON goals(student_id);
CREATE INDEX IF NOT EXISTS idx_students_group ON students(group_name);
"#;

const LAST_SYNC_KEY: &str = "last_sync";

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Parse the JSON-encoded performance column.
fn parse_performance(value: &str) -> std::result::Result<Vec<MonthlyPerformance>, rusqlite::Error> {
    serde_json::from_str(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid performance data: {e}"
            ))),
        )
    })
}

fn encode_performance(performance: &[MonthlyPerformance]) -> rusqlite::Result<String> {
    serde_json::to_string(performance).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// How a row is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Plain insert; an existing key is a constraint violation.
    Insert,
    /// Insert or overwrite by primary key.
    Upsert,
}

impl WriteMode {
    fn verb(&self) -> &'static str {
        match self {
            WriteMode::Insert => "INSERT",
            WriteMode::Upsert => "INSERT OR REPLACE",
        }
    }
}

/// An entity kind stored in its own keyed table.
pub trait Record: Sized {
    /// Table name, also used in error messages.
    const TABLE: &'static str;
    /// Select statement returning every column `from_row` reads.
    const SELECT: &'static str;

    /// The primary key, rendered for messages.
    fn key(&self) -> String;

    /// Write this record with the given mode.
    fn write(&self, conn: &Connection, mode: WriteMode) -> rusqlite::Result<usize>;

    /// Build a record from a row produced by [`Record::SELECT`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl Record for Student {
    const TABLE: &'static str = "students";
    const SELECT: &'static str = "SELECT id, last_name, first_name, group_name, is_active,
            performance, created_at, updated_at FROM students";

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn write(&self, conn: &Connection, mode: WriteMode) -> rusqlite::Result<usize> {
        let sql = format!(
            "{} INTO students (id, last_name, first_name, group_name, is_active,
             performance, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            mode.verb()
        );
        conn.execute(
            &sql,
            params![
                self.id,
                self.last_name,
                self.first_name,
                self.group,
                self.is_active,
                encode_performance(&self.performance)?,
                self.created_at.to_rfc3339(),
                self.updated_at.to_rfc3339(),
            ],
        )
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let performance: String = row.get(5)?;
        let created: String = row.get(6)?;
        let updated: String = row.get(7)?;
        Ok(Student {
            id: row.get(0)?,
            last_name: row.get(1)?,
            first_name: row.get(2)?,
            group: row.get(3)?,
            is_active: row.get(4)?,
            performance: normalize_performance(parse_performance(&performance)?),
            created_at: parse_timestamp(&created, "created_at")?,
            updated_at: parse_timestamp(&updated, "updated_at")?,
        })
    }
}

impl Record for Exercise {
    const TABLE: &'static str = "exercises";
    const SELECT: &'static str =
        "SELECT id, name, category, description, difficulty, video_url FROM exercises";

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn write(&self, conn: &Connection, mode: WriteMode) -> rusqlite::Result<usize> {
        let sql = format!(
            "{} INTO exercises (id, name, category, description, difficulty, video_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            mode.verb()
        );
        conn.execute(
            &sql,
            params![
                self.id,
                self.name,
                self.category,
                self.description,
                self.difficulty,
                self.video_url,
            ],
        )
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Exercise {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            description: row.get(3)?,
            difficulty: row.get(4)?,
            video_url: row.get(5)?,
        })
    }
}

impl Record for Goal {
    const TABLE: &'static str = "goals";
    const SELECT: &'static str = "SELECT id, student_id, student_full_name, exercise_id,
            exercise_name, set_date, completion_date, notes FROM goals";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn write(&self, conn: &Connection, mode: WriteMode) -> rusqlite::Result<usize> {
        let sql = format!(
            "{} INTO goals (id, student_id, student_full_name, exercise_id,
             exercise_name, set_date, completion_date, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            mode.verb()
        );
        conn.execute(
            &sql,
            params![
                self.id,
                self.student_id,
                self.student_full_name,
                self.exercise_id,
                self.exercise_name,
                self.set_date.to_rfc3339(),
                self.completion_date.map(|d| d.to_rfc3339()),
                self.notes,
            ],
        )
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let set_date: String = row.get(5)?;
        let completion: Option<String> = row.get(6)?;
        Ok(Goal {
            id: row.get(0)?,
            student_id: row.get(1)?,
            student_full_name: row.get(2)?,
            exercise_id: row.get(3)?,
            exercise_name: row.get(4)?,
            set_date: parse_timestamp(&set_date, "set_date")?,
            completion_date: completion
                .map(|c| parse_timestamp(&c, "completion_date"))
                .transpose()?,
            notes: row.get(7)?,
        })
    }
}

/// The three entity tables taken together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub students: Vec<Student>,
    pub exercises: Vec<Exercise>,
    pub goals: Vec<Goal>,
}

/// Clear a table and write every item into it.
fn refill<R: Record>(conn: &Connection, items: &[R]) -> Result<()> {
    conn.execute(&format!("DELETE FROM {}", R::TABLE), [])?;
    for item in items {
        item.write(conn, WriteMode::Upsert)?;
    }
    Ok(())
}

/// Re-apply a pending change to local rows.
///
/// Targets that no longer exist are skipped: the change is still queued and
/// the remote decides what it means.
fn apply_change(conn: &Connection, payload: &ChangePayload) -> Result<()> {
    let affected = match payload {
        ChangePayload::AthleteUpdate { student } => conn.execute(
            "UPDATE students SET group_name = ?1, performance = ?2, updated_at = ?3
             WHERE id = ?4",
            params![
                student.group,
                encode_performance(&student.performance)?,
                student.updated_at.to_rfc3339(),
                student.id,
            ],
        )?,
        ChangePayload::GoalAdd { goal } => goal.write(conn, WriteMode::Upsert)?,
        ChangePayload::GoalComplete {
            goal_id,
            completed_at,
        } => conn.execute(
            "UPDATE goals SET completion_date = ?1 WHERE id = ?2",
            params![completed_at.to_rfc3339(), goal_id],
        )?,
        ChangePayload::GoalUncomplete { goal_id } => conn.execute(
            "UPDATE goals SET completion_date = NULL WHERE id = ?1",
            params![goal_id],
        )?,
        ChangePayload::GoalDelete { goal_id } => {
            conn.execute("DELETE FROM goals WHERE id = ?1", params![goal_id])?
        }
    };
    if affected == 0 {
        tracing::debug!(
            kind = %payload.kind(),
            target = %payload.target(),
            "replayed change matched no local row"
        );
    }
    Ok(())
}

/// SQLite database connection with roster operations.
///
/// The connection stays private so table replacement only happens through
/// [`Store::replace_all`] and [`Store::replace_snapshot`]:
///
/// ```compile_fail
/// let store = gym_core::Store::open_in_memory().unwrap();
/// store.conn.execute_batch("DELETE FROM students").unwrap();
/// ```
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at the given path, creating the schema if needed.
    ///
    /// Any failure to open or prepare the file is reported as
    /// [`Error::StorageUnavailable`].
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_inner(path)
            .map_err(|e| Error::StorageUnavailable(format!("{}: {e}", path.display())))
    }

    fn open_inner(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Store { conn })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Store { conn })
    }

    /// Every row of one entity table, ordered by key.
    pub fn get_all<R: Record>(&self) -> Result<Vec<R>> {
        let sql = format!("{} ORDER BY id", R::SELECT);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| R::from_row(row))?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Number of rows in one entity table.
    pub fn count<R: Record>(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", R::TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as usize)
    }

    /// Clear a table and repopulate it in one transaction.
    pub fn replace_all<R: Record>(&mut self, items: &[R]) -> Result<()> {
        let tx = self.conn.transaction()?;
        refill(&tx, items)?;
        tx.commit()?;
        Ok(())
    }

    /// Replace all three entity tables at once, then re-apply `replay` on top.
    ///
    /// Runs in a single transaction: either every table reflects the
    /// snapshot (plus replay) or nothing changed.
    pub fn replace_snapshot(&mut self, snapshot: &Snapshot, replay: &[PendingChange]) -> Result<()> {
        let tx = self.conn.transaction()?;
        refill(&tx, &snapshot.students)?;
        refill(&tx, &snapshot.exercises)?;
        refill(&tx, &snapshot.goals)?;
        for change in replay {
            apply_change(&tx, &change.payload)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Insert or overwrite one record by key.
    pub fn upsert<R: Record>(&self, item: &R) -> Result<()> {
        item.write(&self.conn, WriteMode::Upsert)?;
        Ok(())
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if a record with the same key exists.
    pub fn append<R: Record>(&self, item: &R) -> Result<()> {
        match item.write(&self.conn, WriteMode::Insert) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateKey {
                    table: R::TABLE,
                    id: item.key(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get a student by id.
    pub fn get_student(&self, id: i64) -> Result<Student> {
        let sql = format!("{} WHERE id = ?1", Student::SELECT);
        self.conn
            .query_row(&sql, params![id], |row| Student::from_row(row))
            .optional()?
            .ok_or(Error::StudentNotFound(id))
    }

    /// Get a catalog exercise by id.
    pub fn get_exercise(&self, id: i64) -> Result<Exercise> {
        let sql = format!("{} WHERE id = ?1", Exercise::SELECT);
        self.conn
            .query_row(&sql, params![id], |row| Exercise::from_row(row))
            .optional()?
            .ok_or(Error::ExerciseNotFound(id))
    }

    /// Get a goal by id.
    pub fn get_goal(&self, id: &str) -> Result<Goal> {
        let sql = format!("{} WHERE id = ?1", Goal::SELECT);
        self.conn
            .query_row(&sql, params![id], |row| Goal::from_row(row))
            .optional()?
            .ok_or_else(|| Error::GoalNotFound(id.to_string()))
    }

    /// Goals set for one student, oldest first.
    pub fn goals_for_student(&self, student_id: i64) -> Result<Vec<Goal>> {
        let sql = format!("{} WHERE student_id = ?1 ORDER BY set_date, id", Goal::SELECT);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![student_id], |row| Goal::from_row(row))?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Delete a goal.
    pub fn delete_goal(&self, id: &str) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM goals WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::GoalNotFound(id.to_string()));
        }
        Ok(())
    }

    /// When the last completed sync finished, if ever.
    pub fn get_last_sync(&self) -> Result<Option<DateTime<Utc>>> {
        let value: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = ?1",
                params![LAST_SYNC_KEY],
                |row| row.get(0),
            )
            .optional()?;
        match value.flatten() {
            None => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|_| Error::CorruptedData(format!("invalid last sync timestamp '{s}'"))),
        }
    }

    /// Record the completion time of a sync cycle.
    pub fn set_last_sync(&self, at: DateTime<Utc>) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES (?1, ?2)",
            params![LAST_SYNC_KEY, at.to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
