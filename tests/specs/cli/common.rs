// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `gym-coach` with a clean environment.
///
/// Remote and state-dir variables from the caller's shell are removed so
/// every spec decides for itself.
pub fn gym() -> Command {
    let mut cmd = cargo_bin_cmd!("gym-coach");
    cmd.env_remove("GYM_STATE_DIR")
        .env_remove("GYM_REMOTE_URL")
        .env_remove("GYM_OFFLINE")
        .env_remove("GYM_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// `gym-coach -C <dir> --offline`.
pub fn gym_in(dir: &Path) -> Command {
    let mut cmd = gym();
    cmd.arg("-C").arg(dir).arg("--offline");
    cmd
}

/// A state directory seeded with the built-in roster.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    gym_in(temp.path()).arg("init").assert().success();
    temp
}

/// Run a command with `-o json` and parse stdout.
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = gym_in(dir).args(args).args(["-o", "json"]).output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Number of queued changes, read through `pending -o json`.
pub fn pending_count(dir: &Path) -> usize {
    json_output(dir, &["pending"]).as_array().unwrap().len()
}
