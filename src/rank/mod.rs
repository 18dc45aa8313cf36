//! Rank matching for tracked domains
//!
//! This module provides target normalisation and the lookup that turns a
//! results list into a rank for one domain.

mod domain;
mod matcher;

pub use domain::normalize_domain;
pub use matcher::{find_rank, RankMatch};
