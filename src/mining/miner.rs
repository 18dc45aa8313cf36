use crate::config::{validate, Config};
use crate::fetch::{Fetch, FetchOptions, SearchEndpoints};
use crate::mining::{MiningReport, Suggestion, SuggestionSource};
use futures::future::join_all;
use std::collections::HashSet;
use std::time::Duration;

/// Builds the fan-out queries for a seed, root first, then `a` through `z`
///
/// A blank seed yields no queries.
pub fn fan_out_queries(seed: &str) -> Vec<(String, SuggestionSource)> {
    let seed = seed.trim();
    if seed.is_empty() {
        return Vec::new();
    }

    std::iter::once((seed.to_string(), SuggestionSource::Root))
        .chain(
            ('a'..='z').map(|letter| (format!("{} {}", seed, letter), SuggestionSource::Letter(letter))),
        )
        .collect()
}

/// Extracts suggestion strings from an autocomplete response
///
/// The endpoint answers with `["query", ["s1", "s2", ...], ...]`. Any other
/// shape yields no suggestions. Strings are kept verbatim; only empty
/// strings and non-string items are dropped.
pub fn parse_autocomplete_payload(body: &str) -> Vec<String> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Unparseable autocomplete payload: {}", e);
            return Vec::new();
        }
    };

    value
        .get(1)
        .and_then(|list| list.as_array())
        .map(|list| {
            list.iter()
                .filter_map(|item| item.as_str())
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Mines keyword suggestions from the autocomplete endpoint
pub struct AutocompleteMiner<F> {
    fetcher: F,
    endpoints: SearchEndpoints,
    timeout: Duration,
    max_suggestions: usize,
}

impl<F: Fetch> AutocompleteMiner<F> {
    pub fn new(
        fetcher: F,
        endpoints: SearchEndpoints,
        timeout: Duration,
        max_suggestions: usize,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            timeout,
            max_suggestions,
        }
    }

    /// Creates a miner from a validated configuration
    pub fn from_config(fetcher: F, config: &Config) -> crate::Result<Self> {
        validate(config)?;

        Ok(Self::new(
            fetcher,
            SearchEndpoints::new(&config.search)?,
            config.http.autocomplete_timeout(),
            config.mining.max_suggestions,
        ))
    }

    /// Runs the fan-out and returns unique suggestions
    ///
    /// All queries run concurrently. Results are merged in query order
    /// (root, a, b, ..., z) regardless of completion order, and the first
    /// occurrence of a keyword keeps its source. A failed query contributes
    /// nothing.
    pub async fn mine(&self, seed: &str) -> Vec<Suggestion> {
        let queries = fan_out_queries(seed);
        tracing::debug!("Mining {} autocomplete queries for '{}'", queries.len(), seed);

        let responses = join_all(
            queries
                .iter()
                .map(|(query, source)| self.query(query, *source)),
        )
        .await;

        let mut seen = HashSet::new();
        let suggestions: Vec<Suggestion> = responses
            .into_iter()
            .flatten()
            .filter(|suggestion| seen.insert(suggestion.keyword.clone()))
            .collect();

        tracing::info!(
            "Mined {} unique suggestions for '{}'",
            suggestions.len(),
            seed
        );
        suggestions
    }

    /// Mines, scores and truncates into the outbound report shape
    pub async fn mine_report(&self, seed: &str) -> MiningReport {
        let suggestions = self.mine(seed).await;
        MiningReport::new(seed, suggestions, self.max_suggestions)
    }

    async fn query(&self, query: &str, source: SuggestionSource) -> Vec<Suggestion> {
        let url = self.endpoints.autocomplete_url(query);
        let options = FetchOptions::with_timeout(self.timeout);

        match self.fetcher.fetch(&url, &options).await {
            Ok(body) => parse_autocomplete_payload(&body)
                .into_iter()
                .map(|keyword| Suggestion { keyword, source })
                .collect(),
            Err(e) => {
                tracing::warn!("Autocomplete query '{}' failed: {}", query, e);
                Vec::new()
            }
        }
    }
}
