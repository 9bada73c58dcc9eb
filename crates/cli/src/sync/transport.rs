// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the remote web app.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::Value;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Request could not be sent or timed out.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success HTTP status.
    #[error("http status {0}")]
    Status(u16),

    /// Body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by transport methods.
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + 'a>>;

/// Request/response transport to the remote service.
///
/// Reads are `GET ?action=<name>`; writes are a POST whose body is a JSON
/// document. Both resolve to the parsed JSON response body.
pub trait Transport: Send + Sync {
    /// Issue a read action.
    fn get(&self, action: &str) -> TransportFuture<'_>;

    /// Issue a write with the given body.
    fn post(&self, body: Value) -> TransportFuture<'_>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Create a transport for `url` with a per-request timeout.
    pub fn new(url: &str, timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
        Ok(HttpTransport {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

async fn read_json(response: reqwest::Response) -> TransportResult<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| TransportError::InvalidBody(e.to_string()))
}

impl Transport for HttpTransport {
    fn get(&self, action: &str) -> TransportFuture<'_> {
        let action = action.to_string();
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .query(&[("action", action.as_str())])
                .send()
                .await
                .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
            read_json(response).await
        })
    }

    fn post(&self, body: Value) -> TransportFuture<'_> {
        Box::pin(async move {
            // The web app rejects a JSON content type on cross-origin posts.
            let response = self
                .client
                .post(&self.url)
                .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=utf-8")
                .body(body.to_string())
                .send()
                .await
                .map_err(|e| TransportError::RequestFailed(e.to_string()))?;
            read_json(response).await
        })
    }
}
