//! Oriflame SDK for Rust.
//!
//! Fetches product detail ("concept") data from the Oriflame storefront and
//! decodes it into typed [`Product`](models::Product) records. Each call makes
//! exactly one blocking HTTP request over a pooled connection.
//!
//! # Quick start
//!
//! ```no_run
//! use oriflame_sdk::OriflameClient;
//!
//! let client = OriflameClient::new().unwrap();
//! let product = client.get_product("1276").unwrap();
//! println!("{} ({} variants)", product.name, product.products.len());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod markup;
pub mod models;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncOriflameClient;
pub use error::{ErrorKind, OriflameError, Result};
pub use markup::MarkupPolicy;
pub use models::{Image, ImageSize, Ingredient, Product, Scalar, Variant};
pub use transport::{RawResponse, Transport};

use reqwest::Method;
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// OriflameClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OriflameClient`].
///
/// Use [`OriflameClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](OriflameClientBuilder::build).
#[derive(Debug, Clone)]
pub struct OriflameClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    markup: MarkupPolicy,
}

impl Default for OriflameClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            timeout: None,
            markup: MarkupPolicy::default(),
        }
    }
}

impl OriflameClientBuilder {
    /// Override the scheme and host requests are sent to.
    ///
    /// Defaults to [`config::BASE_URL`]. The concept path is always appended.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a total request timeout.
    ///
    /// When unset, the HTTP client's own defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Choose how markup inside response bodies is handled.
    ///
    /// Defaults to [`MarkupPolicy::StripTags`].
    pub fn markup(mut self, policy: MarkupPolicy) -> Self {
        self.markup = policy;
        self
    }

    /// Build the client, creating its HTTP transport.
    pub fn build(self) -> Result<OriflameClient> {
        if self.base_url.trim().is_empty() {
            return Err(OriflameError::InvalidArgument(
                "base URL must not be empty".into(),
            ));
        }
        let transport = Transport::new(self.timeout)?;
        Ok(OriflameClient {
            transport,
            base_url: self.base_url,
            markup: self.markup,
        })
    }
}

// ---------------------------------------------------------------------------
// OriflameClient
// ---------------------------------------------------------------------------

/// The main entry point for the Oriflame SDK.
///
/// Holds one [`Transport`] for its whole lifetime. All methods take `&self`
/// and the client is `Send + Sync`, so one instance can be shared between
/// threads; calls do not coordinate with each other.
#[derive(Debug, Clone)]
pub struct OriflameClient {
    transport: Transport,
    base_url: String,
    markup: MarkupPolicy,
}

impl OriflameClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> OriflameClientBuilder {
        OriflameClientBuilder::default()
    }

    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Fetch and decode the product identified by `code`.
    ///
    /// The code is placed into the request URL verbatim. Any response body
    /// is decoded regardless of status code, so an upstream error page
    /// surfaces as a decode error.
    ///
    /// # Errors
    ///
    /// * [`OriflameError::Transport`] if the request fails or the body cannot
    ///   be read.
    /// * [`OriflameError::Decode`] if the (filtered) body is not a product
    ///   document.
    pub fn get_product(&self, code: &str) -> Result<Product> {
        let url = config::concept_url(&self.base_url, code);
        let resp = self.transport.execute(Method::GET, &url)?;
        if !resp.status.is_success() {
            tracing::warn!(
                code,
                status = resp.status.as_u16(),
                "concept endpoint returned non-success status"
            );
        }
        self.decode_product(&resp.body)
    }

    /// Apply the markup policy to `body` and decode it as a [`Product`].
    pub fn decode_product(&self, body: &[u8]) -> Result<Product> {
        let filtered = self.markup.apply(body);
        if filtered.len() != body.len() {
            tracing::debug!(
                removed = body.len() - filtered.len(),
                "stripped markup from response body"
            );
        }
        let product = Product::from_slice(&filtered)?;
        Ok(product)
    }

    /// The scheme and host requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The markup policy applied before decoding.
    pub fn markup(&self) -> MarkupPolicy {
        self.markup
    }

    /// Return a reference to the underlying [`Transport`] for advanced usage.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for OriflameClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OriflameClient(base_url={}, markup={})",
            self.base_url, self.markup
        )
    }
}
