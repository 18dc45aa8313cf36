//! Keyword snapshot persistence
//!
//! The batch never touches storage itself: it reads a snapshot through a
//! [`KeywordStore`], and the staged updates are written back through the
//! same store once the batch is done.

mod json;
mod traits;

pub use json::JsonFileStore;
pub use traits::{apply_updates, KeywordStore};
