//! Async wrapper around [`OriflameClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs each fetch on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use oriflame_sdk::AsyncOriflameClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncOriflameClient::builder().build().await.unwrap();
//!     let product = client.get_product("1276").await.unwrap();
//!     println!("{}", product.name);
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{OriflameError, Result};
use crate::markup::MarkupPolicy;
use crate::models::Product;
use crate::{OriflameClient, OriflameClientBuilder};

fn join_error(e: tokio::task::JoinError) -> OriflameError {
    OriflameError::InvalidArgument(format!("Task join error: {e}"))
}

// ---------------------------------------------------------------------------
// AsyncOriflameClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncOriflameClient`].
#[derive(Debug, Clone, Default)]
pub struct AsyncOriflameClientBuilder {
    inner: OriflameClientBuilder,
}

impl AsyncOriflameClientBuilder {
    /// Override the scheme and host requests are sent to.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set a total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Choose how markup inside response bodies is handled.
    pub fn markup(mut self, policy: MarkupPolicy) -> Self {
        self.inner = self.inner.markup(policy);
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client must not be created on an async worker, so
    /// construction runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncOriflameClient> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = builder.build()?;
            Ok(AsyncOriflameClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncOriflameClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`OriflameClient`].
///
/// The wrapped client is already `Sync`, so it is shared through an [`Arc`]
/// without a lock and concurrent fetches do not wait on each other.
#[derive(Clone)]
pub struct AsyncOriflameClient {
    inner: Arc<OriflameClient>,
}

impl AsyncOriflameClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncOriflameClientBuilder {
        AsyncOriflameClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&OriflameClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(join_error)?
    }

    /// Fetch and decode the product identified by `code`.
    ///
    /// See [`OriflameClient::get_product`].
    pub async fn get_product(&self, code: &str) -> Result<Product> {
        let code = code.to_string();
        self.run(move |c| c.get_product(&code)).await
    }

    /// Release the client.
    ///
    /// Dropping the blocking HTTP client joins its worker thread, so the
    /// last handle is dropped on the blocking pool.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(join_error)
    }
}
