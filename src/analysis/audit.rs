//! Heuristic content audit
//!
//! Compares a page against an optional competitor on word count, keyword
//! density and sub-heading structure. No model is consulted; the findings
//! are fixed rules over the extracted content.

use crate::fetch::{Fetch, FetchOptions};
use crate::parse::{parse_page_content, PageContent};
use crate::AuditError;
use serde::Serialize;
use std::time::Duration;

const BASE_SCORE: u32 = 50;
const RULE_BONUS: u32 = 10;
const LONG_FORM_WORDS: usize = 500;
const RICH_STRUCTURE_HEADINGS: usize = 5;
const MAX_MISSING_ENTITIES: usize = 5;

/// Findings for one audited page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// 50-100
    pub score: u32,
    pub summary: String,
    pub missing_entities: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub user_word_count: usize,
    pub competitor_word_count: usize,
    pub user_structure: Vec<String>,
    pub competitor_structure: Vec<String>,
    pub user_title: String,
    pub competitor_title: Option<String>,
}

/// Case-insensitive count of non-overlapping `keyword` occurrences in `text`
pub fn keyword_density(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(keyword.as_str()).count()
}

/// Audits `user` for `keyword`, optionally against a competitor page
pub fn audit_pages(user: &PageContent, competitor: Option<&PageContent>, keyword: &str) -> AuditReport {
    let user_structure = user.headings.structure();
    let competitor_structure = competitor
        .map(|page| page.headings.structure())
        .unwrap_or_default();
    let competitor_word_count = competitor.map(|page| page.word_count).unwrap_or(0);
    let density = keyword_density(&user.text, keyword);

    let mut score = BASE_SCORE;
    if density > 0 {
        score += RULE_BONUS;
    }
    if user.word_count > LONG_FORM_WORDS {
        score += RULE_BONUS;
    }
    if user_structure.len() > RICH_STRUCTURE_HEADINGS {
        score += RULE_BONUS;
    }

    let missing_entities = match competitor {
        Some(_) => {
            let user_text = user.text.to_lowercase();
            competitor_structure
                .iter()
                .filter(|heading| {
                    heading
                        .split_whitespace()
                        .next()
                        .is_some_and(|lead| !user_text.contains(&lead.to_lowercase()))
                })
                .take(MAX_MISSING_ENTITIES)
                .cloned()
                .collect()
        }
        None => vec![
            "Add more sub-headings".to_string(),
            "Cover related FAQs".to_string(),
        ],
    };

    AuditReport {
        score: score.min(100),
        summary: format!(
            "Your content has {} words vs competitor's {}. You mentioned the keyword {} times.",
            user.word_count, competitor_word_count, density
        ),
        missing_entities,
        pros: vec!["Good word count".to_string()],
        cons: vec!["Could be better optimized".to_string()],
        user_word_count: user.word_count,
        competitor_word_count,
        user_structure,
        competitor_structure,
        user_title: user.title.clone(),
        competitor_title: competitor.map(|page| page.title.clone()),
    }
}

/// Fetches both pages concurrently and audits them
///
/// The user page is required. A competitor page that cannot be fetched is
/// logged and the audit continues without it.
pub async fn run_audit<F: Fetch + ?Sized>(
    fetcher: &F,
    user_url: &str,
    competitor_url: Option<&str>,
    keyword: &str,
    timeout: Duration,
) -> Result<AuditReport, AuditError> {
    let options = FetchOptions::with_timeout(timeout);

    let (user_html, competitor_html) = tokio::join!(fetcher.fetch(user_url, &options), async {
        match competitor_url {
            Some(url) => Some(fetcher.fetch(url, &options).await),
            None => None,
        }
    });

    let user_html = user_html.map_err(|source| AuditError::PageUnavailable {
        url: user_url.to_string(),
        source,
    })?;

    let competitor = match competitor_html {
        Some(Ok(html)) => Some(parse_page_content(&html)),
        Some(Err(e)) => {
            tracing::warn!("Competitor page unavailable, auditing without it: {}", e);
            None
        }
        None => None,
    };

    let user = parse_page_content(&user_html);
    tracing::debug!(
        user_words = user.word_count,
        has_competitor = competitor.is_some(),
        "Pages extracted for audit"
    );

    Ok(audit_pages(&user, competitor.as_ref(), keyword))
}
