// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending change log.
//!
//! Local mutations wait here until the remote confirms them. The log lives
//! in a JSONL file, one change per line, and is loaded eagerly on open.
//! Order is insertion order and survives restarts.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::change::PendingChange;
use crate::error::Result;
use crate::jsonl;

/// Durable FIFO of changes not yet confirmed by the remote.
pub struct PendingLog {
    path: PathBuf,
    entries: Vec<PendingChange>,
}

impl PendingLog {
    /// Open the log at `path`, creating an empty file if missing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CorruptedData`] if an existing line cannot
    /// be parsed. A final line left half-written by a crash is dropped and
    /// truncated away instead.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(path)?;
        let entries = jsonl::read_all_repairing(path)?;
        tracing::debug!(path = %path.display(), count = entries.len(), "loaded pending log");

        Ok(PendingLog {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a change. It is on disk before this returns.
    pub fn enqueue(&mut self, change: PendingChange) -> Result<()> {
        jsonl::append(&self.path, &change)?;
        tracing::debug!(id = %change.id, kind = %change.kind(), "queued change");
        self.entries.push(change);
        Ok(())
    }

    /// All pending changes, oldest first.
    pub fn peek_all(&self) -> &[PendingChange] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the confirmed changes, keeping the rest in order.
    ///
    /// Unknown ids are ignored. Returns how many entries were removed. The
    /// file is rewritten atomically; memory is only updated once the
    /// rewrite has landed.
    pub fn remove_confirmed(&mut self, ids: &HashSet<String>) -> Result<usize> {
        let remaining: Vec<PendingChange> = self
            .entries
            .iter()
            .filter(|c| !ids.contains(&c.id))
            .cloned()
            .collect();
        let removed = self.entries.len() - remaining.len();
        if removed == 0 {
            return Ok(0);
        }

        jsonl::write_all(&self.path, &remaining)?;
        self.entries = remaining;
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
