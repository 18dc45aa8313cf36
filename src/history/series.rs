use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;

/// Maximum number of days kept per keyword
pub const HISTORY_CAPACITY: usize = 90;

/// One day's rank observation (0 = not found within the fetched depth)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Read from `YYYY-MM-DD` or a full timestamp; always written as `YYYY-MM-DD`
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    pub rank: usize,
}

/// Calendar day of a plain date, an RFC 3339 timestamp (taken in UTC) or a
/// timestamp without offset
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|instant| instant.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|instant| instant.date())
        })
}

fn deserialize_day<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised history date '{}'", raw)))
}

/// Bounded rank time series for one keyword
///
/// Invariants, upheld by every constructor and mutator:
/// - entries are in ascending date order
/// - at most one entry per calendar day
/// - at most [`HISTORY_CAPACITY`] entries; the oldest is evicted first
///
/// Serialises as a plain sequence. Deserialising an arbitrary sequence
/// restores the invariants (later duplicates of a day win).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct RankHistory {
    entries: VecDeque<HistoryEntry>,
}

impl RankHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries in any order
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            history.record(entry.rank, entry.date);
        }
        history
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entry before the newest one
    pub fn previous(&self) -> Option<&HistoryEntry> {
        self.entries.len().checked_sub(2).and_then(|i| self.entries.get(i))
    }

    /// Folds an observation into the series
    ///
    /// An observation for a day already present overwrites that day's rank.
    /// A new day is appended (or, if it predates the newest entry, inserted
    /// in date order). The oldest entries are then evicted down to capacity.
    pub fn record(&mut self, rank: usize, as_of: NaiveDate) {
        let position = self.entries.partition_point(|entry| entry.date < as_of);

        match self.entries.get_mut(position) {
            Some(entry) if entry.date == as_of => {
                entry.rank = rank;
                return;
            }
            Some(_) => self.entries.insert(position, HistoryEntry { date: as_of, rank }),
            None => self.entries.push_back(HistoryEntry { date: as_of, rank }),
        }

        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Returns a copy of the series with the observation folded in
    pub fn with_observation(&self, rank: usize, as_of: NaiveDate) -> Self {
        let mut next = self.clone();
        next.record(rank, as_of);
        next
    }
}

impl From<Vec<HistoryEntry>> for RankHistory {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<RankHistory> for Vec<HistoryEntry> {
    fn from(history: RankHistory) -> Self {
        history.entries.into()
    }
}

/// Folds a new observation into an existing history without mutating it
pub fn apply_observation(existing: &RankHistory, new_rank: usize, as_of: NaiveDate) -> RankHistory {
    existing.with_observation(new_rank, as_of)
}
