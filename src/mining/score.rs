use crate::mining::{Suggestion, SuggestionSource};
use serde::Serialize;

/// Score every suggestion starts from
pub const BASE_SCORE: i32 = 50;

/// Buying intent
const HIGH_INTENT_TERMS: &[&str] = &["best", "top"];
const HIGH_INTENT_BONUS: i32 = 20;

/// Comparison and research intent
const RESEARCH_TERMS: &[&str] = &["review", "vs"];
const RESEARCH_BONUS: i32 = 15;

/// Low commercial value
const LOW_VALUE_TERMS: &[&str] = &["pdf", "free"];
const LOW_VALUE_PENALTY: i32 = 10;

/// A suggestion annotated with its intent score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSuggestion {
    pub keyword: String,
    pub source: SuggestionSource,
    pub score: i32,
}

/// Mining result handed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiningReport {
    pub seed: String,
    /// Unique suggestions mined, before truncation
    pub count: usize,
    /// Highest scores first
    pub suggestions: Vec<ScoredSuggestion>,
}

impl MiningReport {
    pub fn new(seed: &str, suggestions: Vec<Suggestion>, limit: usize) -> Self {
        Self {
            seed: seed.to_string(),
            count: suggestions.len(),
            suggestions: score_suggestions(suggestions, limit),
        }
    }
}

/// Intent score of a keyword
///
/// Terms match as literal, case-sensitive substrings, and each group
/// applies at most once.
pub fn score_keyword(keyword: &str) -> i32 {
    let contains_any = |terms: &[&str]| terms.iter().any(|term| keyword.contains(term));

    let mut score = BASE_SCORE;
    if contains_any(HIGH_INTENT_TERMS) {
        score += HIGH_INTENT_BONUS;
    }
    if contains_any(RESEARCH_TERMS) {
        score += RESEARCH_BONUS;
    }
    if contains_any(LOW_VALUE_TERMS) {
        score -= LOW_VALUE_PENALTY;
    }
    score
}

/// Scores, sorts descending by score and keeps the top `limit`
///
/// Ties keep their first-seen order.
pub fn score_suggestions(suggestions: Vec<Suggestion>, limit: usize) -> Vec<ScoredSuggestion> {
    let mut scored: Vec<ScoredSuggestion> = suggestions
        .into_iter()
        .map(|suggestion| ScoredSuggestion {
            score: score_keyword(&suggestion.keyword),
            keyword: suggestion.keyword,
            source: suggestion.source,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
