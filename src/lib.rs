//! Serp-Velocity: a search rank tracker
//!
//! This crate scrapes a search results page to find where target domains rank
//! for tracked keywords, folds each observation into a bounded rank history
//! with a derived velocity, and mines new keyword candidates from an
//! autocomplete endpoint.

pub mod analysis;
pub mod batch;
pub mod config;
pub mod fetch;
pub mod history;
pub mod mining;
pub mod output;
pub mod parse;
pub mod rank;
pub mod scrape;
pub mod store;

use thiserror::Error;

/// Main error type for Serp-Velocity operations
#[derive(Debug, Error)]
pub enum VelocityError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single outbound request
///
/// Network errors, timeouts and non-2xx statuses all collapse into this type;
/// fetchers never panic or propagate anything else.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Failed to read body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Keyword snapshot store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Update refers to unknown keyword record: {0}")]
    UnknownRecord(String),
}

/// Content audit errors
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Could not fetch {url}: {source}")]
    PageUnavailable { url: String, source: FetchError },
}

/// Result type alias for Serp-Velocity operations
pub type Result<T> = std::result::Result<T, VelocityError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for snapshot store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// Re-export commonly used types
pub use batch::{BatchOrchestrator, BatchReport, KeywordRecord, KeywordUpdate};
pub use config::Config;
pub use fetch::{Fetch, FetchOptions, HttpFetcher};
pub use history::{RankHistory, VelocityReading};
pub use mining::{AutocompleteMiner, Suggestion, SuggestionSource};
pub use parse::{PageContent, SearchResult};
pub use rank::{find_rank, normalize_domain, RankMatch};
