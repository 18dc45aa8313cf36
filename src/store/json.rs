use crate::batch::{KeywordRecord, KeywordUpdate};
use crate::store::{apply_updates, KeywordStore};
use crate::StoreResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Keyword snapshot kept as a JSON array of records in one file
///
/// Writes go to a sibling temporary file that is then renamed over the
/// snapshot; readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, records: &[KeywordRecord]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)?;

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl KeywordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<KeywordRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn write_back(&mut self, updates: &[KeywordUpdate]) -> StoreResult<usize> {
        if updates.is_empty() {
            return Ok(0);
        }

        let mut records = self.load()?;
        let changed = apply_updates(&mut records, updates)?;
        self.save(&records)?;

        tracing::info!("Wrote {} keyword updates to {}", changed, self.path.display());
        Ok(changed)
    }
}
