//! HTML extraction for search results pages and arbitrary content pages
//!
//! Both entry points are infallible: malformed or unexpected markup degrades
//! to empty or partial output instead of an error. Callers tell "no page"
//! apart from "empty page" by the fetch result, not by the parser.

mod content;
mod serp;

pub use content::{parse_page_content, MAX_TEXT_CHARS};
pub use serp::{parse_search_results_page, NO_SNIPPET};

use serde::{Deserialize, Serialize};

/// One organic entry of a results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    /// 1-based position among the retained entries
    pub rank: usize,
}

/// Heading text grouped by level, each in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

impl Headings {
    pub fn is_empty(&self) -> bool {
        self.h1.is_empty() && self.h2.is_empty() && self.h3.is_empty()
    }

    /// Sub-structure of a page: h2 headings followed by h3 headings
    pub fn structure(&self) -> Vec<String> {
        self.h2.iter().chain(self.h3.iter()).cloned().collect()
    }
}

/// Readable content of a fetched page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub headings: Headings,
    /// Visible body text, whitespace-collapsed and capped at [`MAX_TEXT_CHARS`]
    pub text: String,
    pub meta_description: String,
    pub word_count: usize,
    /// Every JSON-LD block that parsed
    pub structured_data: Vec<serde_json::Value>,
}

impl PageContent {
    /// True when nothing at all could be extracted
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.text.is_empty()
            && self.headings.is_empty()
            && self.meta_description.is_empty()
            && self.structured_data.is_empty()
    }
}

/// Collapses runs of whitespace into single spaces and trims the ends
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
