// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common patterns.

use clap::{Args, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `-o/--output` for list-style commands.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Student list filters.
#[derive(Args, Clone, Debug, Default)]
pub struct StudentFilterArgs {
    /// Only students in this group
    #[arg(long, short)]
    pub group: Option<String>,

    /// Case-insensitive match on first or last name
    #[arg(long, short)]
    pub search: Option<String>,

    /// Hide inactive students
    #[arg(long, short)]
    pub active: bool,
}
