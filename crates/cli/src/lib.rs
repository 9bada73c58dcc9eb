// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gymsync - offline-first sync for the gym coach roster tracker.
//!
//! This crate provides the `gym-coach` command-line front end and the sync
//! layer that keeps the local store in step with the remote spreadsheet
//! service.
//!
//! # Main Components
//!
//! - [`sync::SyncCoordinator`] - owns local state; mutations, sync cycles
//! - [`sync::RemoteClient`] - remote reads and writes over a [`sync::Transport`]
//! - [`Config`] - state-directory configuration (`config.toml`)
//! - [`Error`] - Error types for all CLI operations
//!
//! Every command opens the state directory, takes its lock and initializes
//! the coordinator on first use, so a fresh directory is seeded or
//! downloaded automatically.

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
mod logging;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, GoalCommand, OutputArgs, OutputFormat, StudentFilterArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub async fn run(cli: Cli) -> Result<()> {
    if let Command::Completions { shell } = cli.command {
        generate(shell, &mut Cli::command(), "gym-coach", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = Context::open(cli.state_dir, cli.offline)?;
    match cli.command {
        Command::Init { remote_url } => commands::init::run(&mut ctx, remote_url).await,
        Command::Students { filter, output } => {
            commands::roster::students(&ctx, &filter, output.output).await
        }
        Command::Show { id, output } => commands::roster::show(&ctx, id, output.output).await,
        Command::Groups { output } => commands::roster::groups(&ctx, output.output).await,
        Command::Exercises { output } => commands::roster::exercises(&ctx, output.output).await,
        Command::SetGroup { id, group } => commands::roster::set_group(&ctx, id, &group).await,
        Command::Record {
            id,
            month,
            exercise,
            count,
        } => commands::roster::record(&ctx, id, &month, exercise, count).await,
        Command::Goals {
            student_id,
            open,
            output,
        } => commands::goals::list(&ctx, student_id, open, output.output).await,
        Command::Goal(command) => commands::goals::run(&ctx, command).await,
        Command::Sync { output } => commands::sync::sync(&ctx, output.output).await,
        Command::Status { output } => commands::sync::status(&ctx, output.output).await,
        Command::Pending { output } => commands::sync::pending(&ctx, output.output).await,
        Command::Completions { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
