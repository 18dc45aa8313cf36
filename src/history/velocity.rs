use crate::history::RankHistory;
use serde::Serialize;

/// Velocity derived from the two newest history entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VelocityReading {
    pub current_rank: usize,
    pub previous_rank: usize,
    /// `previous - current`; positive means the keyword moved up
    pub velocity: i64,
}

/// Stand-in rank for a keyword that fell out of the fetched depth
///
/// One position below the deeper of the fetch depth and the previous rank,
/// so a drop out of the results always reads as a decline.
pub fn not_found_sentinel(fetch_depth: usize, previous_rank: usize) -> usize {
    fetch_depth.max(previous_rank) + 1
}

/// Computes the velocity for the newest observation in `history`
///
/// - Both ranked: `previous - current`.
/// - Previously unranked (or no previous day): 0, there is no baseline.
/// - Dropped out: measured against [`not_found_sentinel`], so it is always
///   strictly negative.
pub fn compute_velocity(history: &RankHistory, fetch_depth: usize) -> VelocityReading {
    let current_rank = history.latest().map(|entry| entry.rank).unwrap_or(0);
    let previous_rank = history.previous().map(|entry| entry.rank).unwrap_or(0);

    let velocity = if previous_rank == 0 {
        0
    } else if current_rank == 0 {
        previous_rank as i64 - not_found_sentinel(fetch_depth, previous_rank) as i64
    } else {
        previous_rank as i64 - current_rank as i64
    };

    VelocityReading {
        current_rank,
        previous_rank,
        velocity,
    }
}
