// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `GYM_STATE_DIR` if set and non-empty.
pub fn state_dir() -> Option<PathBuf> {
    std::env::var(vars::GYM_STATE_DIR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the value of `GYM_REMOTE_URL` if set and non-empty.
pub fn remote_url() -> Option<String> {
    std::env::var(vars::GYM_REMOTE_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns `true` if `GYM_OFFLINE` is set to anything but `0`/`false`.
pub fn offline() -> bool {
    std::env::var(vars::GYM_OFFLINE)
        .is_ok_and(|v| !matches!(v.trim().to_lowercase().as_str(), "" | "0" | "false"))
}

/// Returns the `GYM_LOG` filter directive if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::GYM_LOG).ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
