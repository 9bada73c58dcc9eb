// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_change_line, format_datetime};
use crate::error::{Error, Result};
use crate::sync::SyncReport;

use super::{emit, Context, Coordinator};

#[derive(Serialize)]
struct SyncSummary {
    pushed: usize,
    rejected: usize,
    failed: usize,
    still_pending: usize,
    students: usize,
    exercises: usize,
    goals: usize,
    completed_at: DateTime<Utc>,
}

impl From<&SyncReport> for SyncSummary {
    fn from(report: &SyncReport) -> Self {
        SyncSummary {
            pushed: report.pushed,
            rejected: report.rejected,
            failed: report.failed,
            still_pending: report.still_pending(),
            students: report.students,
            exercises: report.exercises,
            goals: report.goals,
            completed_at: report.completed_at,
        }
    }
}

#[derive(Serialize)]
struct Status {
    state_dir: String,
    state: String,
    remote: Option<String>,
    offline: bool,
    last_sync: Option<DateTime<Utc>>,
    pending: usize,
    students: usize,
    exercises: usize,
    goals: usize,
}

pub async fn sync(ctx: &Context, format: OutputFormat) -> Result<()> {
    // `--offline` reports through the coordinator; a missing URL is a setup error.
    if ctx.config.remote.url.is_none() && !ctx.config.offline {
        return Err(Error::NoRemote);
    }
    let coordinator = ctx.ready().await?;
    let report = coordinator.sync().await?;
    let summary = SyncSummary::from(&report);
    emit(format, &summary, || sync_lines(&report))
}

pub(crate) fn sync_lines(report: &SyncReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Pushed {} change(s); downloaded {} students, {} exercises, {} goals",
        report.pushed, report.students, report.exercises, report.goals
    )];
    if report.still_pending() > 0 {
        lines.push(colors::pending(&format!(
            "{} change(s) still pending ({} rejected, {} failed)",
            report.still_pending(),
            report.rejected,
            report.failed
        )));
    }
    lines
}

pub async fn status(ctx: &Context, format: OutputFormat) -> Result<()> {
    let coordinator = ctx.ready().await?;
    status_impl(ctx, &coordinator, format)
}

pub(crate) fn status_impl(
    ctx: &Context,
    coordinator: &Coordinator,
    format: OutputFormat,
) -> Result<()> {
    let status = Status {
        state_dir: ctx.paths.root.display().to_string(),
        state: coordinator.state().to_string(),
        remote: ctx.config.remote.url.clone(),
        offline: ctx.config.offline,
        last_sync: coordinator.last_sync()?,
        pending: coordinator.pending_count(),
        students: coordinator.students()?.len(),
        exercises: coordinator.exercises()?.len(),
        goals: coordinator.goals()?.len(),
    };
    emit(format, &status, || status_lines(&status))
}

fn status_lines(status: &Status) -> Vec<String> {
    let remote = match (&status.remote, status.offline) {
        (Some(url), false) => url.clone(),
        (Some(url), true) => format!("{url} (offline)"),
        (None, _) => "not configured".to_string(),
    };
    let last_sync = status
        .last_sync
        .map(format_datetime)
        .unwrap_or_else(|| "never".to_string());
    let pending = if status.pending > 0 {
        colors::pending(&status.pending.to_string())
    } else {
        status.pending.to_string()
    };
    vec![
        format!("State directory: {}", status.state_dir),
        format!("State: {}", status.state),
        format!("Remote: {remote}"),
        format!("Last sync: {last_sync}"),
        format!("Pending changes: {pending}"),
        format!(
            "Roster: {} students, {} exercises, {} goals",
            status.students, status.exercises, status.goals
        ),
    ]
}

pub async fn pending(ctx: &Context, format: OutputFormat) -> Result<()> {
    let coordinator = ctx.ready().await?;
    let changes = coordinator.pending_changes();
    emit(format, &changes, || {
        if changes.is_empty() {
            return vec!["No pending changes.".to_string()];
        }
        changes.iter().map(format_change_line).collect()
    })
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
