//! Results page parser
//!
//! Targets a fixed results page layout: organic entries are `.g` containers
//! holding an `h3` title, a leading anchor and a snippet block. Layout drift
//! shows up as fewer (or zero) results, never as an error.

use crate::parse::{collapse_whitespace, SearchResult};
use scraper::{ElementRef, Html, Selector};

/// Snippet used when an entry carries no recognisable snippet block
pub const NO_SNIPPET: &str = "No snippet available";

const CONTAINER_SELECTOR: &str = ".g";
const TITLE_SELECTOR: &str = "h3";
const LINK_SELECTOR: &str = "a";
const SNIPPET_SELECTOR: &str = ".VwiC3b, .yXK7lf, .MUxGbd, .IsZvec";

/// Prefix of the engine's own internal links (related searches, image packs)
const INTERNAL_LINK_PREFIX: &str = "/search";

/// Parses a results page into ranked organic entries
///
/// Containers without a title or link, or linking back into the engine, are
/// skipped. Ranks are assigned by position among the retained entries and the
/// list is truncated to `max_results`.
///
/// # Example
///
/// ```
/// use serp_velocity::parse::parse_search_results_page;
///
/// let html = r#"<div class="g"><a href="https://example.com/"><h3>Example</h3></a></div>"#;
/// let results = parse_search_results_page(html, 10);
/// assert_eq!(results[0].rank, 1);
/// assert_eq!(results[0].link, "https://example.com/");
/// ```
pub fn parse_search_results_page(html: &str, max_results: usize) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    let (Ok(container_sel), Ok(title_sel), Ok(link_sel), Ok(snippet_sel)) = (
        Selector::parse(CONTAINER_SELECTOR),
        Selector::parse(TITLE_SELECTOR),
        Selector::parse(LINK_SELECTOR),
        Selector::parse(SNIPPET_SELECTOR),
    ) else {
        return Vec::new();
    };

    let mut results = Vec::new();

    for container in document.select(&container_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(title) = first_text(container, &title_sel) else {
            tracing::trace!("Skipping result container without a title");
            continue;
        };

        let link = container
            .select(&link_sel)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .map(str::trim)
            .unwrap_or_default();

        if link.is_empty() || link.starts_with(INTERNAL_LINK_PREFIX) {
            tracing::trace!("Skipping result '{}' with link '{}'", title, link);
            continue;
        }

        let snippet =
            first_text(container, &snippet_sel).unwrap_or_else(|| NO_SNIPPET.to_string());

        results.push(SearchResult {
            title,
            link: link.to_string(),
            snippet,
            rank: results.len() + 1,
        });
    }

    tracing::debug!("Parsed {} organic results", results.len());
    results
}

/// Whitespace-collapsed text of the first match, if it has any
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}
