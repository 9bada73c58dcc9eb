// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline-first sync with the remote spreadsheet service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────┐
//! │ SyncCoordinator  │────►│ RemoteClient │────►│  Transport  │────►│ Web app │
//! │  (state machine) │◄────│ (wire shapes)│◄────│   (trait)   │◄────│         │
//! └──────────────────┘     └──────────────┘     └─────────────┘     └─────────┘
//!     │          │
//!     ▼          ▼
//! ┌───────┐  ┌────────────┐
//! │ Store │  │ PendingLog │  (changes awaiting confirmation)
//! └───────┘  └────────────┘
//! ```
//!
//! # Features
//!
//! - Local writes first, then a durable pending change
//! - Drain, full download and replay in one sync cycle
//! - Reachability check before any network work
//! - Injectable transport and probe traits for testing

mod coordinator;
mod reachability;
mod remote;
mod transport;
mod wire;

pub use coordinator::{
    InitSource, NewGoal, SyncCoordinator, SyncError, SyncReport, SyncResult, SyncState,
};
pub use reachability::{FixedReachability, ProbeFuture, Reachability, TcpProbe};
pub use remote::{PushOutcome, RemoteClient, RemoteError, RemoteResult};
pub use transport::{HttpTransport, Transport, TransportError, TransportFuture, TransportResult};



#[cfg(test)]
mod remote_tests;
