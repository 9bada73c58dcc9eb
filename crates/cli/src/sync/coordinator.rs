// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync coordinator: the single owner of local state.
//!
//! Every read and mutation goes through here. Mutations write the store
//! first and then enqueue a pending change, so local edits are visible
//! without waiting on the network. A sync cycle drains the pending log,
//! downloads fresh tables, and replays whatever is still pending on top.
//!
//! The coordinator runs on a single-threaded executor. State lives in
//! `Cell`/`RefCell` and no borrow is held across an await point, so a
//! second `sync()` polled while the first is suspended sees `Syncing` and
//! is turned away.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};

use gym_core::{
    parse_month, seed_snapshot, Exercise, ExerciseKind, Goal, PendingChange, PendingLog,
    Snapshot, Store, Student,
};

use super::reachability::Reachability;
use super::remote::{PushOutcome, RemoteClient};
use super::transport::{HttpTransport, Transport};

/// Error type for coordinator operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// `initialize()` has not completed.
    #[error("not initialized\n  hint: run 'gym-coach init' first")]
    NotReady,

    /// The remote cannot be reached; nothing was attempted.
    #[error("offline: the remote service is not reachable\n  hint: pending changes stay queued until the next sync")]
    Offline,

    /// Another sync cycle is running.
    #[error("a sync is already in progress")]
    SyncInProgress,

    /// A network step failed; drained changes stay removed.
    #[error("sync failed: {cause}")]
    SyncFailed { cause: String },

    /// Neither the remote nor the built-in dataset could populate the store.
    #[error("initialization failed: {cause}")]
    InitializationFailed { cause: String },

    /// Local storage error.
    #[error(transparent)]
    Core(#[from] gym_core::Error),
}

/// Result type for coordinator operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Lifecycle state of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Uninitialized,
    Initializing,
    Ready,
    Syncing,
    /// The last sync failed. Behaves like `Ready`.
    SyncFailed,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Uninitialized => "uninitialized",
            SyncState::Initializing => "initializing",
            SyncState::Ready => "ready",
            SyncState::Syncing => "syncing",
            SyncState::SyncFailed => "sync-failed",
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the initial data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitSource {
    /// The store already had students.
    Existing,
    /// Downloaded from the remote.
    Remote,
    /// The built-in starter roster.
    Seed,
}

/// What a completed sync cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Changes the remote accepted and that left the log.
    pub pushed: usize,
    /// Changes the remote answered `success: false` for.
    pub rejected: usize,
    /// Changes that hit a transport error.
    pub failed: usize,
    pub students: usize,
    pub exercises: usize,
    pub goals: usize,
    pub completed_at: DateTime<Utc>,
}

impl SyncReport {
    /// Changes still waiting after this cycle.
    pub fn still_pending(&self) -> usize {
        self.rejected + self.failed
    }
}

/// Input for a new goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub student_id: i64,
    pub exercise_id: i64,
    /// Defaults to now.
    pub set_date: Option<DateTime<Utc>>,
    pub notes: String,
}

struct DrainStats {
    pushed: usize,
    rejected: usize,
    failed: usize,
}

/// Owns the store, the pending log, the remote client and the probe.
pub struct SyncCoordinator<T: Transport = HttpTransport, R: Reachability = Box<dyn Reachability>> {
    store: RefCell<Store>,
    log: RefCell<PendingLog>,
    remote: RemoteClient<T>,
    reachability: R,
    state: Cell<SyncState>,
}

impl<T: Transport, R: Reachability> SyncCoordinator<T, R> {
    /// Assemble a coordinator from already-opened parts.
    pub fn new(store: Store, log: PendingLog, remote: RemoteClient<T>, reachability: R) -> Self {
        SyncCoordinator {
            store: RefCell::new(store),
            log: RefCell::new(log),
            remote,
            reachability,
            state: Cell::new(SyncState::Uninitialized),
        }
    }

    pub fn state(&self) -> SyncState {
        self.state.get()
    }

    pub fn remote(&self) -> &RemoteClient<T> {
        &self.remote
    }

    pub fn reachability(&self) -> &R {
        &self.reachability
    }

    /// Populate an empty store and become ready.
    ///
    /// On an empty store, tries a remote download when reachable and falls
    /// back to the built-in roster. Never sets the last-sync timestamp.
    /// Calling it again once ready is a no-op.
    pub async fn initialize(&self) -> SyncResult<InitSource> {
        match self.state.get() {
            SyncState::Uninitialized => {}
            SyncState::Initializing => return Err(SyncError::NotReady),
            SyncState::Ready | SyncState::Syncing | SyncState::SyncFailed => {
                return Ok(InitSource::Existing)
            }
        }
        self.state.set(SyncState::Initializing);

        match self.first_contact().await {
            Ok(source) => {
                self.state.set(SyncState::Ready);
                tracing::info!(?source, pending = self.pending_count(), "coordinator ready");
                Ok(source)
            }
            Err(e) => {
                self.state.set(SyncState::Uninitialized);
                Err(e)
            }
        }
    }

    async fn first_contact(&self) -> SyncResult<InitSource> {
        let empty = self
            .store
            .borrow()
            .count::<Student>()
            .map_err(|e| SyncError::InitializationFailed {
                cause: e.to_string(),
            })?
            == 0;
        if !empty {
            return Ok(InitSource::Existing);
        }

        let mut remote_cause = "remote not reachable".to_string();
        if self.reachability.is_reachable().await {
            match self.remote.fetch_snapshot().await {
                Ok(snapshot) => match self.store_snapshot(&snapshot) {
                    Ok(()) => {
                        tracing::info!(
                            students = snapshot.students.len(),
                            "populated store from remote"
                        );
                        return Ok(InitSource::Remote);
                    }
                    Err(e) => remote_cause = e.to_string(),
                },
                Err(e) => remote_cause = e.to_string(),
            }
            tracing::warn!(cause = %remote_cause, "remote download failed, seeding built-in roster");
        }

        self.store_snapshot(&seed_snapshot(Utc::now()))
            .map_err(|e| SyncError::InitializationFailed {
                cause: format!("{remote_cause}; seeding failed: {e}"),
            })?;
        tracing::info!("populated store from built-in roster");
        Ok(InitSource::Seed)
    }

    /// Replace local tables with `snapshot` and replay pending changes.
    fn store_snapshot(&self, snapshot: &Snapshot) -> gym_core::Result<()> {
        let pending = self.log.borrow().peek_all().to_vec();
        self.store
            .borrow_mut()
            .replace_snapshot(snapshot, &pending)
    }

    fn ensure_ready(&self) -> SyncResult<()> {
        match self.state.get() {
            SyncState::Ready | SyncState::Syncing => Ok(()),
            SyncState::SyncFailed => {
                self.state.set(SyncState::Ready);
                Ok(())
            }
            SyncState::Uninitialized | SyncState::Initializing => Err(SyncError::NotReady),
        }
    }

    /// Run one sync cycle: drain, download, stamp.
    pub async fn sync(&self) -> SyncResult<SyncReport> {
        match self.state.get() {
            SyncState::Ready | SyncState::SyncFailed => {}
            SyncState::Syncing => return Err(SyncError::SyncInProgress),
            SyncState::Uninitialized | SyncState::Initializing => return Err(SyncError::NotReady),
        }
        // Claimed before the first await so a concurrent call is rejected.
        self.state.set(SyncState::Syncing);

        if !self.reachability.is_reachable().await {
            self.state.set(SyncState::Ready);
            return Err(SyncError::Offline);
        }

        match self.run_cycle().await {
            Ok(report) => {
                self.state.set(SyncState::Ready);
                tracing::info!(
                    pushed = report.pushed,
                    rejected = report.rejected,
                    failed = report.failed,
                    students = report.students,
                    "sync complete"
                );
                Ok(report)
            }
            Err(e) => {
                self.state.set(SyncState::SyncFailed);
                let cause = match e {
                    SyncError::SyncFailed { cause } => cause,
                    other => other.to_string(),
                };
                tracing::warn!(%cause, "sync failed");
                Err(SyncError::SyncFailed { cause })
            }
        }
    }

    async fn run_cycle(&self) -> SyncResult<SyncReport> {
        let drained = self.drain().await?;

        let snapshot = self
            .remote
            .fetch_snapshot()
            .await
            .map_err(|e| SyncError::SyncFailed {
                cause: e.to_string(),
            })?;
        self.store_snapshot(&snapshot)?;

        let completed_at = Utc::now();
        self.store.borrow().set_last_sync(completed_at)?;

        Ok(SyncReport {
            pushed: drained.pushed,
            rejected: drained.rejected,
            failed: drained.failed,
            students: snapshot.students.len(),
            exercises: snapshot.exercises.len(),
            goals: snapshot.goals.len(),
            completed_at,
        })
    }

    /// Push every queued change in order; drop the accepted ones.
    async fn drain(&self) -> SyncResult<DrainStats> {
        let queued = self.log.borrow().peek_all().to_vec();
        let mut confirmed = HashSet::new();
        let mut stats = DrainStats {
            pushed: 0,
            rejected: 0,
            failed: 0,
        };

        for change in &queued {
            match self.remote.push_change(change).await {
                PushOutcome::Accepted => {
                    confirmed.insert(change.id.clone());
                }
                PushOutcome::Rejected { message } => {
                    stats.rejected += 1;
                    tracing::warn!(id = %change.id, kind = %change.kind(), %message, "remote rejected change");
                }
                PushOutcome::Failed { message } => {
                    stats.failed += 1;
                    tracing::warn!(id = %change.id, kind = %change.kind(), %message, "failed to push change");
                }
            }
        }

        if !confirmed.is_empty() {
            stats.pushed = self.log.borrow_mut().remove_confirmed(&confirmed)?;
        }
        Ok(stats)
    }

    // Reads

    pub fn students(&self) -> SyncResult<Vec<Student>> {
        Ok(self.store.borrow().get_all::<Student>()?)
    }

    pub fn student(&self, id: i64) -> SyncResult<Student> {
        Ok(self.store.borrow().get_student(id)?)
    }

    pub fn exercises(&self) -> SyncResult<Vec<Exercise>> {
        Ok(self.store.borrow().get_all::<Exercise>()?)
    }

    pub fn goals(&self) -> SyncResult<Vec<Goal>> {
        Ok(self.store.borrow().get_all::<Goal>()?)
    }

    pub fn goals_for_student(&self, student_id: i64) -> SyncResult<Vec<Goal>> {
        Ok(self.store.borrow().goals_for_student(student_id)?)
    }

    /// Distinct non-empty group names, sorted.
    pub fn groups(&self) -> SyncResult<Vec<String>> {
        let groups: BTreeSet<String> = self
            .students()?
            .into_iter()
            .map(|s| s.group)
            .filter(|g| !g.trim().is_empty())
            .collect();
        Ok(groups.into_iter().collect())
    }

    pub fn last_sync(&self) -> SyncResult<Option<DateTime<Utc>>> {
        Ok(self.store.borrow().get_last_sync()?)
    }

    pub fn pending_count(&self) -> usize {
        self.log.borrow().count()
    }

    pub fn pending_changes(&self) -> Vec<PendingChange> {
        self.log.borrow().peek_all().to_vec()
    }

    // Mutations

    fn enqueue(&self, change: PendingChange) -> SyncResult<()> {
        self.log.borrow_mut().enqueue(change)?;
        Ok(())
    }

    /// Save a student's group and counts, stamping `updated_at`.
    pub fn update_student(&self, student: &Student) -> SyncResult<Student> {
        self.ensure_ready()?;
        // Must exist locally; the remote has no create action.
        self.store.borrow().get_student(student.id)?;

        let mut updated = student.clone();
        updated.updated_at = Utc::now();
        self.store.borrow().upsert(&updated)?;
        self.enqueue(PendingChange::athlete_update(&updated))?;
        Ok(updated)
    }

    /// Move a student to another group.
    pub fn set_group(&self, student_id: i64, group: &str) -> SyncResult<Student> {
        self.ensure_ready()?;
        let mut student = self.store.borrow().get_student(student_id)?;
        student.group = group.trim().to_string();
        self.update_student(&student)
    }

    /// Record one month's count for one exercise.
    pub fn record_performance(
        &self,
        student_id: i64,
        month: &str,
        kind: ExerciseKind,
        count: u32,
    ) -> SyncResult<Student> {
        self.ensure_ready()?;
        let month = parse_month(month)?;
        let mut student = self.store.borrow().get_student(student_id)?;
        student.record(month, kind, count)?;
        self.update_student(&student)
    }

    /// Create a goal, copying the student's and exercise's display names.
    pub fn add_goal(&self, new: NewGoal) -> SyncResult<Goal> {
        self.ensure_ready()?;
        let (student, exercise) = {
            let store = self.store.borrow();
            (
                store.get_student(new.student_id)?,
                store.get_exercise(new.exercise_id)?,
            )
        };
        let goal = Goal::for_student(
            &student,
            &exercise,
            new.set_date.unwrap_or_else(Utc::now),
            new.notes,
        );
        self.store.borrow().append(&goal)?;
        self.enqueue(PendingChange::goal_add(&goal))?;
        Ok(goal)
    }

    /// Mark a goal completed at `completed_at`, or reopen it with `None`.
    pub fn set_goal_completion(
        &self,
        goal_id: &str,
        completed_at: Option<DateTime<Utc>>,
    ) -> SyncResult<Goal> {
        self.ensure_ready()?;
        let mut goal = self.store.borrow().get_goal(goal_id)?;
        goal.completion_date = completed_at;
        self.store.borrow().upsert(&goal)?;
        self.enqueue(PendingChange::goal_completion(goal_id, completed_at))?;
        Ok(goal)
    }

    pub fn delete_goal(&self, goal_id: &str) -> SyncResult<()> {
        self.ensure_ready()?;
        self.store.borrow().delete_goal(goal_id)?;
        self.enqueue(PendingChange::goal_delete(goal_id))?;
        Ok(())
    }
}
