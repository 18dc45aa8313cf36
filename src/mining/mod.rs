//! Keyword mining through autocomplete fan-out
//!
//! A seed expands into 27 autocomplete queries (the seed itself plus
//! `seed a` through `seed z`). Results are merged in query order, deduplicated
//! by exact keyword, then scored by a buying-intent heuristic.

mod miner;
mod score;

pub use miner::{fan_out_queries, parse_autocomplete_payload, AutocompleteMiner};
pub use score::{score_keyword, score_suggestions, MiningReport, ScoredSuggestion, BASE_SCORE};

use serde::{Serialize, Serializer};
use std::fmt;

/// Which autocomplete query produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionSource {
    /// The bare seed
    Root,
    /// The seed followed by this letter
    Letter(char),
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Letter(letter) => write!(f, "{}", letter),
        }
    }
}

impl Serialize for SuggestionSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A mined keyword candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub keyword: String,
    pub source: SuggestionSource,
}
