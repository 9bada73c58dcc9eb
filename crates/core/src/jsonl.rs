// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) file utilities.
//!
//! Each record is one JSON line. Appends are fsynced; rewrites go through a
//! sibling temp file and a rename so a crash leaves either the old or the
//! new content, never a mix.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Appends a record to a JSONL file with fsync for durability.
pub fn append<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{json}")?;
    file.sync_all()?;

    Ok(())
}

/// A final line cut off by a crash mid-append.
struct TornTail {
    offset: u64,
    line: usize,
    error: String,
}

struct Loaded<T> {
    records: Vec<T>,
    torn: Option<TornTail>,
    /// The last record parsed but its newline never made it to disk.
    unterminated: bool,
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<Loaded<T>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    let mut unterminated = false;
    let mut offset = 0usize;
    for (idx, chunk) in bytes.split_inclusive(|b| *b == b'\n').enumerate() {
        let start = offset;
        offset += chunk.len();
        let complete = chunk.ends_with(b"\n");
        if chunk.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<T>(chunk) {
            Ok(record) => {
                records.push(record);
                unterminated = !complete;
            }
            Err(e) if !complete => {
                return Ok(Loaded {
                    records,
                    torn: Some(TornTail {
                        offset: start as u64,
                        line: idx + 1,
                        error: e.to_string(),
                    }),
                    unterminated: false,
                });
            }
            Err(e) => {
                return Err(Error::CorruptedData(format!(
                    "{}:{}: {e}",
                    path.display(),
                    idx + 1
                )))
            }
        }
    }

    Ok(Loaded {
        records,
        torn: None,
        unterminated,
    })
}

/// Reads all records from a JSONL file.
///
/// Skips empty lines and returns an empty vec if the file doesn't exist.
/// A line that fails to parse is reported as [`Error::CorruptedData`] with
/// its line number.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let loaded = load(path)?;
    match loaded.torn {
        Some(tail) => Err(Error::CorruptedData(format!(
            "{}:{}: {}",
            path.display(),
            tail.line,
            tail.error
        ))),
        None => Ok(loaded.records),
    }
}

/// Like [`read_all`], but an unparsable final line without a trailing
/// newline is treated as a torn append: it is dropped and the file is
/// truncated back to the last complete line.
///
/// Unparsable lines elsewhere are still [`Error::CorruptedData`].
pub fn read_all_repairing<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let loaded = load(path)?;
    if let Some(tail) = loaded.torn {
        tracing::warn!(
            path = %path.display(),
            line = tail.line,
            error = %tail.error,
            "dropping torn final line"
        );
        let file = OpenOptions::new().write(true).open(path)?;
        file.set_len(tail.offset)?;
        file.sync_all()?;
    } else if loaded.unterminated {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(b"\n")?;
        file.sync_all()?;
    }
    Ok(loaded.records)
}

/// Atomically replaces a JSONL file with the given records.
pub fn write_all<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let tmp = temp_path(path);
    {
        let mut file = File::create(&tmp)?;
        for record in records {
            let json = serde_json::to_string(record)?;
            writeln!(file, "{json}")?;
        }
        file.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
