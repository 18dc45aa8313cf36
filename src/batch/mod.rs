//! Batch rank updates
//!
//! This module contains:
//! - The keyword snapshot and update types exchanged with the store
//! - Rate gates that space out results page requests
//! - The orchestrator that scrapes, matches and folds each keyword in turn

mod orchestrator;
mod rate_limit;

pub use orchestrator::BatchOrchestrator;
pub use rate_limit::{IntervalGate, NoDelay, RateGate};

use crate::history::RankHistory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one tracked keyword as read from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub id: String,
    pub keyword: String,

    /// Tracked domain or URL
    #[serde(alias = "target_domain", alias = "target_url")]
    pub target: String,

    /// 0 = unranked or not found
    #[serde(default)]
    pub current_rank: usize,

    #[serde(default)]
    pub previous_rank: usize,

    #[serde(default)]
    pub velocity: i64,

    #[serde(default)]
    pub history: RankHistory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl KeywordRecord {
    pub fn new(id: impl Into<String>, keyword: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keyword: keyword.into(),
            target: target.into(),
            current_rank: 0,
            previous_rank: 0,
            velocity: 0,
            history: RankHistory::new(),
            updated_at: None,
        }
    }

    /// True when the record tracks a specific page rather than a bare domain
    pub fn tracks_url(&self) -> bool {
        self.target.contains("://")
    }
}

/// New state for one keyword, staged for write-back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordUpdate {
    pub id: String,
    pub keyword: String,
    pub rank: usize,
    pub prev_rank: usize,
    pub velocity: i64,
    pub timestamp: DateTime<Utc>,
    pub history: RankHistory,
    /// Link of the matched result, when the domain was found
    pub matched_url: Option<String>,
}

/// A keyword that could not be updated in this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItemFailure {
    pub id: String,
    pub keyword: String,
    pub reason: String,
}

/// Outcome of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub updated: usize,
    pub updates: Vec<KeywordUpdate>,
    pub failures: Vec<BatchItemFailure>,
}

impl BatchReport {
    /// Keywords processed but not updated
    pub fn skipped(&self) -> usize {
        self.processed - self.updated
    }
}
