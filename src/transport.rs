//! Blocking HTTP transport shared by every fetch.
//!
//! Owns a single `reqwest` client so connections are pooled and reused
//! across calls. The transport never retries and never inspects status
//! codes; callers decide what a non-2xx response means.

use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use std::time::Duration;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Reusable HTTP execution component.
///
/// Built once and read-only afterwards. `reqwest::blocking::Client` is
/// internally reference counted, so the transport is `Send + Sync` and can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
}

impl Transport {
    /// Create a transport. `timeout` of `None` keeps the client defaults.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Issue one request and read the whole body into memory.
    ///
    /// The response is consumed by `bytes()`, which hands the connection
    /// back to the pool whether reading succeeds or fails.
    pub fn execute(&self, method: Method, url: &str) -> Result<RawResponse> {
        tracing::debug!(%method, url, "sending request");
        let resp = self.client.request(method, url).send()?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes()?.to_vec();
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
