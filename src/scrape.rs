//! Results page scraping: one fetch, one parse

use crate::fetch::{Fetch, FetchOptions, SearchEndpoints};
use crate::parse::{parse_search_results_page, SearchResult};
use crate::FetchError;
use std::time::Duration;

/// Fetches the results page for `query` and parses its top `depth` entries
///
/// An `Ok` with an empty list means the page came back but held no
/// recognisable organic results.
pub async fn scrape_results<F: Fetch + ?Sized>(
    fetcher: &F,
    endpoints: &SearchEndpoints,
    query: &str,
    depth: usize,
    timeout: Duration,
) -> Result<Vec<SearchResult>, FetchError> {
    let url = endpoints.serp_url(query, depth);
    let options = FetchOptions::with_timeout(timeout).header("Referer", endpoints.serp_origin());

    let html = fetcher.fetch(&url, &options).await?;
    Ok(parse_search_results_page(&html, depth))
}
