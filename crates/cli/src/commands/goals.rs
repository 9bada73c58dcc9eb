// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, NaiveDate, Utc};

use gym_core::Goal;

use crate::cli::{GoalCommand, OutputFormat};
use crate::display::{format_date, format_goal_line};
use crate::error::{Error, Result};
use crate::sync::NewGoal;

use super::{emit, Context, Coordinator};

/// Parse a `--date` value: `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub(crate) fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| Error::InvalidDate(input.to_string()))
}

fn parse_optional_date(input: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    input.map(parse_date).transpose()
}

pub async fn list(
    ctx: &Context,
    student_id: Option<i64>,
    open_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let coordinator = ctx.ready().await?;
    list_impl(&coordinator, student_id, open_only, format)
}

pub(crate) fn select_goals(
    coordinator: &Coordinator,
    student_id: Option<i64>,
    open_only: bool,
) -> Result<Vec<Goal>> {
    let goals = match student_id {
        Some(id) => {
            // Surface an unknown student instead of an empty list.
            coordinator.student(id)?;
            coordinator.goals_for_student(id)?
        }
        None => coordinator.goals()?,
    };
    Ok(goals
        .into_iter()
        .filter(|g| !open_only || !g.is_completed())
        .collect())
}

pub(crate) fn list_impl(
    coordinator: &Coordinator,
    student_id: Option<i64>,
    open_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let goals = select_goals(coordinator, student_id, open_only)?;
    emit(format, &goals, || {
        if goals.is_empty() {
            return vec!["No goals.".to_string()];
        }
        goals.iter().map(format_goal_line).collect()
    })
}

pub async fn run(ctx: &Context, command: GoalCommand) -> Result<()> {
    let coordinator = ctx.ready().await?;
    run_impl(&coordinator, command)
}

pub(crate) fn run_impl(coordinator: &Coordinator, command: GoalCommand) -> Result<()> {
    match command {
        GoalCommand::Add {
            student_id,
            exercise_id,
            date,
            notes,
        } => {
            let goal = coordinator.add_goal(NewGoal {
                student_id,
                exercise_id,
                set_date: parse_optional_date(date.as_deref())?,
                notes,
            })?;
            println!(
                "Added goal {}: {} for {}",
                goal.id, goal.exercise_name, goal.student_full_name
            );
        }
        GoalCommand::Complete { goal_id, date } => {
            let at = parse_optional_date(date.as_deref())?.unwrap_or_else(Utc::now);
            let goal = coordinator.set_goal_completion(&goal_id, Some(at))?;
            println!("Completed goal {} on {}", goal.id, format_date(at));
        }
        GoalCommand::Reopen { goal_id } => {
            let goal = coordinator.set_goal_completion(&goal_id, None)?;
            println!("Reopened goal {}", goal.id);
        }
        GoalCommand::Delete { goal_id } => {
            coordinator.delete_goal(&goal_id)?;
            println!("Deleted goal {goal_id}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "goals_tests.rs"]
mod tests;
