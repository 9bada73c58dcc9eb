// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging.
//!
//! Logs go to `<state>/gym-coach.log` so they never mix with command
//! output. `GYM_LOG` takes an `EnvFilter` directive (default `warn`).

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `GYM_LOG`, falling back to the default on a bad
/// directive.
pub fn filter() -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Falls back to stderr if the log file
/// cannot be opened. A second call is a no-op.
pub fn setup_logging(log_path: &Path) {
    let filter = filter();

    if let Ok(file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
