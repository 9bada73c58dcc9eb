// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod goals;
pub mod init;
pub mod roster;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

use gym_core::{PendingLog, Store};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{resolve_state_dir, Config, StatePaths};
use crate::env;
use crate::error::{Error, Result};
use crate::logging;
use crate::sync::{
    FixedReachability, HttpTransport, Reachability, RemoteClient, SyncCoordinator, TcpProbe,
};

/// The coordinator as the binary wires it.
pub type Coordinator = SyncCoordinator<HttpTransport, Box<dyn Reachability>>;

/// An opened state directory: paths, effective config and the process lock.
pub struct Context {
    pub paths: StatePaths,
    pub config: Config,
    _lock: File,
}

impl Context {
    /// Resolve and lock the state directory, start logging and load config.
    pub fn open(state_dir: Option<PathBuf>, offline: bool) -> Result<Self> {
        let root = resolve_state_dir(state_dir, env::state_dir())?;
        let paths = StatePaths::new(&root);
        paths.ensure()?;
        let lock = acquire_lock(&paths)?;
        logging::setup_logging(&paths.log);

        let config = Config::load(&paths.root)?.with_env(offline)?;
        tracing::debug!(
            state_dir = %paths.root.display(),
            remote = config.remote_url().unwrap_or("-"),
            offline = config.offline,
            "opened state directory"
        );
        Ok(Context {
            paths,
            config,
            _lock: lock,
        })
    }

    /// Assemble a coordinator over this directory's store and log.
    ///
    /// Without a usable remote URL the probe always answers offline, so the
    /// placeholder transport is never called.
    pub fn coordinator(&self) -> Result<Coordinator> {
        let store = Store::open(&self.paths.db)?;
        let log = PendingLog::open(&self.paths.pending)?;

        let remote = &self.config.remote;
        let url = self.config.remote_url();
        let probe: Box<dyn Reachability> = match url.and_then(|u| {
            TcpProbe::for_url(u, Duration::from_millis(remote.probe_timeout_ms))
        }) {
            Some(probe) => Box::new(probe),
            None => Box::new(FixedReachability::offline()),
        };
        let transport =
            HttpTransport::new(url.unwrap_or_default(), Duration::from_secs(remote.timeout_secs))?;

        Ok(SyncCoordinator::new(
            store,
            log,
            RemoteClient::with_transport(transport),
            probe,
        ))
    }

    /// A coordinator that has completed first-contact initialization.
    pub async fn ready(&self) -> Result<Coordinator> {
        let coordinator = self.coordinator()?;
        coordinator.initialize().await?;
        Ok(coordinator)
    }
}

fn acquire_lock(paths: &StatePaths) -> Result<File> {
    use fs2::FileExt;

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&paths.lock)?;
    file.try_lock_exclusive()
        .map_err(|_| Error::StateLocked(paths.root.display().to_string()))?;
    Ok(file)
}

/// Print `value` as one JSON document.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print text lines or a JSON document depending on `format`.
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> Vec<String>,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Text => {
            for line in text() {
                println!("{line}");
            }
            Ok(())
        }
    }
}
