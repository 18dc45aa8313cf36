use crate::parse::SearchResult;
use serde::Serialize;

const POSITIVE_WORDS: &[&str] = &["best", "top", "good", "great", "recommend", "leading"];
const NEGATIVE_WORDS: &[&str] = &["bad", "worst", "avoid", "scam", "slow", "poor"];

/// Overall tone of the results that mention a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    /// No results to judge: blocked page or empty results
    Unknown,
}

/// How visible a brand is on one results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMentionSummary {
    /// Share of results mentioning the brand, 0-100
    pub visibility_percent: u32,
    pub sentiment: Sentiment,
    pub mentions_count: usize,
    pub total_results: usize,
    /// Highest ranked result that mentions the brand
    pub top_result: Option<SearchResult>,
}

/// Counts brand mentions in result titles and snippets and scores their tone
///
/// Each mentioning result adds +1 for any positive word and -1 for any
/// negative word in its text. The sign of the total picks the sentiment.
pub fn analyze_brand_mentions(results: &[SearchResult], brand: &str) -> BrandMentionSummary {
    let brand = brand.trim().to_lowercase();
    let total_results = results.len();

    let mut mentions_count = 0;
    let mut tone = 0i64;
    let mut top_result = None;

    if !brand.is_empty() {
        for result in results {
            let text = format!("{} {}", result.title, result.snippet).to_lowercase();
            if !text.contains(&brand) {
                continue;
            }

            mentions_count += 1;
            if top_result.is_none() {
                top_result = Some(result.clone());
            }
            if POSITIVE_WORDS.iter().any(|word| text.contains(word)) {
                tone += 1;
            }
            if NEGATIVE_WORDS.iter().any(|word| text.contains(word)) {
                tone -= 1;
            }
        }
    }

    let visibility_percent = if total_results == 0 {
        0
    } else {
        (mentions_count as f64 / total_results as f64 * 100.0).round() as u32
    };

    let sentiment = if total_results == 0 {
        Sentiment::Unknown
    } else if tone > 0 {
        Sentiment::Positive
    } else if tone < 0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    BrandMentionSummary {
        visibility_percent,
        sentiment,
        mentions_count,
        total_results,
        top_result,
    }
}
