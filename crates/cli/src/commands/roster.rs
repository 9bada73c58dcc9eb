// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use serde::Serialize;

use gym_core::{Exercise, ExerciseKind, Goal, Student};

use crate::cli::{OutputFormat, StudentFilterArgs};
use crate::display::{
    format_exercise_line, format_student_details, format_student_line,
};
use crate::error::{Error, Result};

use super::{emit, Context, Coordinator};

#[derive(Serialize)]
struct StudentDetails {
    #[serde(flatten)]
    student: Student,
    goals: Vec<Goal>,
}

pub async fn students(ctx: &Context, filter: &StudentFilterArgs, format: OutputFormat) -> Result<()> {
    let coordinator = ctx.ready().await?;
    students_impl(&coordinator, filter, format)
}

pub(crate) fn students_impl(
    coordinator: &Coordinator,
    filter: &StudentFilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let students = filter_students(coordinator.students()?, filter);
    emit(format, &students, || {
        if students.is_empty() {
            return vec!["No students match.".to_string()];
        }
        students.iter().map(format_student_line).collect()
    })
}

/// Apply group, name and activity filters, keeping store order.
pub(crate) fn filter_students(students: Vec<Student>, filter: &StudentFilterArgs) -> Vec<Student> {
    let group = filter.group.as_deref().map(str::trim);
    students
        .into_iter()
        .filter(|s| group.is_none_or(|g| s.group == g))
        .filter(|s| filter.search.as_deref().is_none_or(|q| s.matches_name(q)))
        .filter(|s| !filter.active || s.is_active)
        .collect()
}

pub async fn show(ctx: &Context, id: i64, format: OutputFormat) -> Result<()> {
    let coordinator = ctx.ready().await?;
    show_impl(&coordinator, id, format)
}

pub(crate) fn show_impl(coordinator: &Coordinator, id: i64, format: OutputFormat) -> Result<()> {
    let details = StudentDetails {
        student: coordinator.student(id)?,
        goals: coordinator.goals_for_student(id)?,
    };
    emit(format, &details, || {
        vec![format_student_details(
            &details.student,
            &details.goals,
            Utc::now(),
        )]
    })
}

pub async fn groups(ctx: &Context, format: OutputFormat) -> Result<()> {
    let coordinator = ctx.ready().await?;
    let groups = coordinator.groups()?;
    emit(format, &groups, || groups.clone())
}

pub async fn exercises(ctx: &Context, format: OutputFormat) -> Result<()> {
    let coordinator = ctx.ready().await?;
    let exercises: Vec<Exercise> = coordinator.exercises()?;
    emit(format, &exercises, || {
        exercises.iter().map(format_exercise_line).collect()
    })
}

pub async fn set_group(ctx: &Context, id: i64, group: &str) -> Result<()> {
    let coordinator = ctx.ready().await?;
    set_group_impl(&coordinator, id, group)
}

pub(crate) fn set_group_impl(coordinator: &Coordinator, id: i64, group: &str) -> Result<()> {
    if group.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "group" });
    }
    let student = coordinator.set_group(id, group)?;
    println!("Moved {} to group {}", student.full_name(), student.group);
    Ok(())
}

pub async fn record(
    ctx: &Context,
    id: i64,
    month: &str,
    exercise: ExerciseKind,
    count: u32,
) -> Result<()> {
    let coordinator = ctx.ready().await?;
    record_impl(&coordinator, id, month, exercise, count)
}

pub(crate) fn record_impl(
    coordinator: &Coordinator,
    id: i64,
    month: &str,
    exercise: ExerciseKind,
    count: u32,
) -> Result<()> {
    let student = coordinator.record_performance(id, month, exercise, count)?;
    let month = gym_core::parse_month(month)?;
    println!(
        "Recorded {} {} = {} for {}",
        month,
        exercise.label(),
        count,
        student.full_name()
    );
    Ok(())
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
