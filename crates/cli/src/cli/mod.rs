// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;
use std::str::FromStr;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gym_core::ExerciseKind;

pub use args::{OutputArgs, OutputFormat, StudentFilterArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn exercise_kind(s: &str) -> Result<ExerciseKind, String> {
    ExerciseKind::from_str(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "gym-coach")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "An offline-first roster tracker for gymnastics coaches")]
#[command(
    long_about = "An offline-first roster tracker for gymnastics coaches.\n\n\
    Every edit is saved locally and queued; 'sync' pushes the queue to the \
    remote spreadsheet service and refreshes the local copy."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Use <path> as the state directory
    #[arg(short = 'C', long = "state-dir", global = true, value_name = "path")]
    pub state_dir: Option<PathBuf>,

    /// Never contact the remote service
    #[arg(long, global = true)]
    pub offline: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Roster
    // ─────────────────────────────────────────────────────────────────────────
    /// List students
    #[command(after_help = colors::examples("\
Examples:
  gym-coach students                  All students
  gym-coach students -g А-1 --active  Active students in group А-1
  gym-coach students -s иван -o json  Name search as JSON"))]
    Students {
        #[command(flatten)]
        filter: StudentFilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a student's details and goals
    #[command(arg_required_else_help = true)]
    Show {
        /// Student id
        id: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List training groups
    Groups {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the exercise catalog
    Exercises {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Move a student to another group
    #[command(arg_required_else_help = true)]
    SetGroup {
        /// Student id
        id: i64,

        /// New group name
        #[arg(value_parser = non_empty_string)]
        group: String,
    },

    /// Record a monthly count
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  gym-coach record 1 Окт pullups 18   October pull-ups
  gym-coach record 1 10 dips 22       Month by calendar number")
    )]
    Record {
        /// Student id
        id: i64,

        /// Month label (Сент..Авг) or calendar number (1-12)
        month: String,

        /// Exercise (pullups, pushups, dips)
        #[arg(value_parser = exercise_kind)]
        exercise: ExerciseKind,

        /// Repetition count
        count: u32,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────────────────────
    /// List goals, optionally for one student
    Goals {
        /// Student id
        student_id: Option<i64>,

        /// Hide completed goals
        #[arg(long)]
        open: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Add, complete, reopen or delete a goal
    #[command(subcommand)]
    Goal(GoalCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Sync & setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Set up local state, downloading the roster when reachable
    #[command(after_help = colors::examples("\
Examples:
  gym-coach init                               Seed or download
  gym-coach init --remote-url <url>            Save the remote and download
  gym-coach init --offline                     Start from the built-in roster"))]
    Init {
        /// Remote web app URL to save in the config
        #[arg(long, value_name = "url")]
        remote_url: Option<String>,
    },

    /// Push queued changes and refresh from the remote
    Sync {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show sync state, last sync and queue size
    Status {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List queued changes, oldest first
    Pending {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  gym-coach completions bash > ~/.local/share/bash-completion/completions/gym-coach
  gym-coach completions zsh > ~/.zfunc/_gym-coach")
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum GoalCommand {
    /// Set a new goal for a student
    #[command(arg_required_else_help = true)]
    Add {
        /// Student id
        student_id: i64,

        /// Exercise id from the catalog
        exercise_id: i64,

        /// Date the goal is set (default: now)
        #[arg(long)]
        date: Option<String>,

        /// Free-form notes
        #[arg(long, short, default_value = "")]
        notes: String,
    },

    /// Mark a goal completed
    #[command(arg_required_else_help = true)]
    Complete {
        /// Goal id
        goal_id: String,

        /// Completion date (default: now)
        #[arg(long)]
        date: Option<String>,
    },

    /// Clear a goal's completion
    #[command(arg_required_else_help = true)]
    Reopen {
        /// Goal id
        goal_id: String,
    },

    /// Delete a goal
    #[command(arg_required_else_help = true)]
    Delete {
        /// Goal id
        goal_id: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
