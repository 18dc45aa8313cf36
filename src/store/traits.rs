use crate::batch::{KeywordRecord, KeywordUpdate};
use crate::{StoreError, StoreResult};
use std::collections::HashMap;

/// Source and sink of tracked keyword records
pub trait KeywordStore {
    /// Reads the current snapshot of every tracked keyword
    fn load(&self) -> StoreResult<Vec<KeywordRecord>>;

    /// Persists a batch's staged updates
    ///
    /// Either every update is applied or none is. Returns the number of
    /// records changed.
    fn write_back(&mut self, updates: &[KeywordUpdate]) -> StoreResult<usize>;
}

/// Applies staged updates to records by id
///
/// Fails without touching `records` when any update names an unknown id.
/// A record that tracks a specific URL has its target replaced by the
/// matched result's link.
pub fn apply_updates(records: &mut [KeywordRecord], updates: &[KeywordUpdate]) -> StoreResult<usize> {
    let index: HashMap<&str, usize> = records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.id.as_str(), i))
        .collect();

    let mut targets = Vec::with_capacity(updates.len());
    for update in updates {
        let position = index
            .get(update.id.as_str())
            .copied()
            .ok_or_else(|| StoreError::UnknownRecord(update.id.clone()))?;
        targets.push(position);
    }

    for (update, position) in updates.iter().zip(targets) {
        let record = &mut records[position];

        record.current_rank = update.rank;
        record.previous_rank = update.prev_rank;
        record.velocity = update.velocity;
        record.history = update.history.clone();
        record.updated_at = Some(update.timestamp);

        if record.tracks_url() {
            if let Some(url) = &update.matched_url {
                record.target = url.clone();
            }
        }
    }

    Ok(updates.len())
}
