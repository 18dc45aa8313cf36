//! Rank history and velocity
//!
//! This module provides:
//! - `RankHistory`: a day-bucketed rank time series capped at 90 entries
//! - `compute_velocity`: the signed rank delta between the two newest days

mod series;
mod velocity;

pub use series::{apply_observation, HistoryEntry, RankHistory, HISTORY_CAPACITY};
pub use velocity::{compute_velocity, not_found_sentinel, VelocityReading};
