// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network reachability checks.
//!
//! The coordinator asks before any network work; an unreachable answer
//! means no request is attempted at all.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::net::TcpStream;

/// Boxed future returned by [`Reachability::is_reachable`].
pub type ProbeFuture<'a> = Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

/// Answers whether the remote service can currently be reached.
pub trait Reachability: Send + Sync {
    fn is_reachable(&self) -> ProbeFuture<'_>;
}

impl<R: Reachability + ?Sized> Reachability for Box<R> {
    fn is_reachable(&self) -> ProbeFuture<'_> {
        (**self).is_reachable()
    }
}

/// A fixed answer: used for `--offline` and when no remote is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedReachability(pub bool);

impl FixedReachability {
    pub fn offline() -> Self {
        FixedReachability(false)
    }

    pub fn online() -> Self {
        FixedReachability(true)
    }
}

impl Reachability for FixedReachability {
    fn is_reachable(&self) -> ProbeFuture<'_> {
        let reachable = self.0;
        Box::pin(async move { reachable })
    }
}

/// Probes by opening a TCP connection to the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    /// Build a probe for the host and port of `url`.
    ///
    /// Returns `None` if the URL has no host or no known port.
    pub fn for_url(url: &str, timeout: Duration) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str()?.to_string();
        let port = parsed.port_or_known_default()?;
        Some(TcpProbe {
            host,
            port,
            timeout,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Reachability for TcpProbe {
    fn is_reachable(&self) -> ProbeFuture<'_> {
        Box::pin(async move {
            let addr = (self.host.as_str(), self.port);
            match tokio::time::timeout(self.timeout, TcpStream::connect(addr)).await {
                Ok(Ok(_)) => true,
                Ok(Err(e)) => {
                    tracing::debug!(host = %self.host, error = %e, "remote unreachable");
                    false
                }
                Err(_) => {
                    tracing::debug!(host = %self.host, "reachability probe timed out");
                    false
                }
            }
        })
    }
}
