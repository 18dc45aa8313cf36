//! Batch orchestrator - sequential rank updates across a keyword set
//!
//! Keywords are processed one at a time with a rate gate in front of every
//! results page request. The search engine is far less tolerant of bursts
//! than the autocomplete endpoint, so this loop is deliberately serial.
//!
//! Per keyword:
//! 1. Normalise the tracked target and refuse a date older than its history
//! 2. Wait on the rate gate, fetch the results page at the configured depth,
//!    then tell the gate the request is done
//! 3. Parse organic results and match the domain
//! 4. Fold the rank into the keyword's history and derive velocity
//! 5. Stage an update
//!
//! Any failure is recorded against that keyword alone and the batch moves on.

use crate::batch::{
    BatchItemFailure, BatchReport, IntervalGate, KeywordRecord, KeywordUpdate, RateGate,
};
use crate::config::{validate, Config};
use crate::fetch::{Fetch, SearchEndpoints};
use crate::history::compute_velocity;
use crate::rank::{find_rank, normalize_domain};
use crate::scrape::scrape_results;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Drives rank updates for a batch of keyword records
///
/// Holds no state between runs: each run works only from the snapshot it is
/// given and returns the updates for the store to persist.
pub struct BatchOrchestrator<F, G> {
    fetcher: F,
    gate: G,
    endpoints: SearchEndpoints,
    fetch_depth: usize,
    request_timeout: Duration,
}

impl<F: Fetch> BatchOrchestrator<F, IntervalGate> {
    /// Creates an orchestrator gated by the configured inter-request delay
    ///
    /// The configuration is validated first, so a hand-built [`Config`]
    /// gets the same checks as one loaded from a file.
    pub fn from_config(fetcher: F, config: &Config) -> crate::Result<Self> {
        validate(config)?;

        Ok(Self::new(
            fetcher,
            IntervalGate::new(config.tracking.min_inter_request_delay()),
            SearchEndpoints::new(&config.search)?,
            config.tracking.fetch_depth,
            config.http.request_timeout(),
        ))
    }
}

impl<F: Fetch, G: RateGate> BatchOrchestrator<F, G> {
    pub fn new(
        fetcher: F,
        gate: G,
        endpoints: SearchEndpoints,
        fetch_depth: usize,
        request_timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            gate,
            endpoints,
            fetch_depth,
            request_timeout,
        }
    }

    /// Runs the batch over `records`, stamping updates with `now`
    ///
    /// `processed` counts every record; `updated` counts staged updates. The
    /// difference are the recorded failures.
    pub async fn run(&self, records: &[KeywordRecord], now: DateTime<Utc>) -> BatchReport {
        tracing::info!(
            "Starting rank update for {} keywords (depth {})",
            records.len(),
            self.fetch_depth
        );

        let mut report = BatchReport::default();

        for record in records {
            report.processed += 1;

            match self.process(record, now).await {
                Ok(update) => {
                    tracing::debug!(
                        keyword = %record.keyword,
                        rank = update.rank,
                        velocity = update.velocity,
                        "Keyword updated"
                    );
                    report.updates.push(update);
                }
                Err(reason) => {
                    tracing::warn!("Skipping keyword '{}': {}", record.keyword, reason);
                    report.failures.push(BatchItemFailure {
                        id: record.id.clone(),
                        keyword: record.keyword.clone(),
                        reason,
                    });
                }
            }
        }

        report.updated = report.updates.len();

        tracing::info!(
            "Rank update complete: {} processed, {} updated, {} skipped",
            report.processed,
            report.updated,
            report.skipped()
        );

        report
    }

    /// Processes one keyword; the error is the recorded failure reason
    async fn process(
        &self,
        record: &KeywordRecord,
        now: DateTime<Utc>,
    ) -> Result<KeywordUpdate, String> {
        let domain = normalize_domain(&record.target)
            .ok_or_else(|| format!("no usable target domain in '{}'", record.target))?;

        let today = now.date_naive();
        if let Some(newest) = record.history.latest() {
            if newest.date > today {
                tracing::warn!(
                    keyword = %record.keyword,
                    "Observation dated {} is older than history entry {}",
                    today,
                    newest.date
                );
                return Err(format!(
                    "observation dated {} predates newest history entry {}",
                    today, newest.date
                ));
            }
        }

        self.gate.wait().await;

        let scraped = scrape_results(
            &self.fetcher,
            &self.endpoints,
            &record.keyword,
            self.fetch_depth,
            self.request_timeout,
        )
        .await;
        self.gate.done();

        let results = scraped.map_err(|e| format!("could not fetch results page: {}", e))?;

        if results.is_empty() {
            // A page with no organic entries is a block or layout change,
            // not evidence that the domain dropped out
            return Err("results page yielded no organic results".to_string());
        }

        let found = find_rank(&results, &domain);
        let history = record.history.with_observation(found.rank, today);
        let reading = compute_velocity(&history, self.fetch_depth);

        Ok(KeywordUpdate {
            id: record.id.clone(),
            keyword: record.keyword.clone(),
            rank: reading.current_rank,
            prev_rank: reading.previous_rank,
            velocity: reading.velocity,
            timestamp: now,
            history,
            matched_url: found.matched_result.map(|result| result.link),
        })
    }
}
