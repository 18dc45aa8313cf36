//! Outbound HTTP for search pages, autocomplete payloads and audited pages
//!
//! This module contains:
//! - The [`Fetch`] trait every component fetches through
//! - [`HttpFetcher`], the reqwest-backed implementation with User-Agent rotation
//! - [`SearchEndpoints`], which builds results page and autocomplete URLs

mod client;
mod endpoints;

pub use client::{build_http_client, HttpFetcher};
pub use endpoints::SearchEndpoints;

use crate::FetchError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Timeout used when a caller does not pick one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-request options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Upper bound for the whole request, body included
    pub timeout: Duration,

    /// Extra headers; these replace the fetcher's defaults of the same name
    pub headers: Vec<(String, String)>,
}

impl FetchOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            headers: Vec::new(),
        }
    }

    /// Adds a header to the request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

/// Something that can GET a URL and hand back its body
///
/// Implementations never retry and never panic: network errors, timeouts and
/// non-2xx statuses are all reported as a [`FetchError`].
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: Fetch + ?Sized> Fetch for Arc<T> {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String, FetchError> {
        (**self).fetch(url, options).await
    }
}
