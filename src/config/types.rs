use serde::Deserialize;
use std::time::Duration;

/// Browser User-Agent strings rotated across requests
const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// Main configuration structure for Serp-Velocity
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub mining: MiningConfig,
}

/// Search engine endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the results page, queried with `q`, `num` and `hl`
    #[serde(rename = "serp-base-url")]
    pub serp_base_url: String,

    /// Base URL of the autocomplete endpoint
    #[serde(rename = "autocomplete-base-url")]
    pub autocomplete_base_url: String,

    /// Interface language sent as `hl`
    pub language: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serp_base_url: "https://www.google.com/search".to_string(),
            autocomplete_base_url: "https://google.com/complete/search".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Outbound HTTP behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout for results page and content fetches (milliseconds)
    #[serde(rename = "request-timeout-ms")]
    pub request_timeout_ms: u64,

    /// Timeout for each autocomplete query (milliseconds)
    #[serde(rename = "autocomplete-timeout-ms")]
    pub autocomplete_timeout_ms: u64,

    /// Pool of User-Agent strings, one picked at random per request
    #[serde(rename = "user-agents")]
    pub user_agents: Vec<String>,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn autocomplete_timeout(&self) -> Duration {
        Duration::from_millis(self.autocomplete_timeout_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
            autocomplete_timeout_ms: 3_000,
            user_agents: DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }
}

/// Rank tracking behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Number of top results fetched per keyword
    #[serde(rename = "fetch-depth")]
    pub fetch_depth: usize,

    /// Minimum time between results page requests (milliseconds)
    #[serde(rename = "min-inter-request-delay-ms")]
    pub min_inter_request_delay_ms: u64,
}

impl TrackingConfig {
    pub fn min_inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.min_inter_request_delay_ms)
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            fetch_depth: 10,
            min_inter_request_delay_ms: 1_000,
        }
    }
}

/// Keyword mining behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Maximum number of scored suggestions returned per seed
    #[serde(rename = "max-suggestions")]
    pub max_suggestions: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 100,
        }
    }
}
