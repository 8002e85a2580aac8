//! Offline store backed by a JSON snapshot of both tables.

use super::types::{parse_created_at, RawHeroRecord, Snapshot, TraitRow};
use super::HeroStore;
use crate::utils::error::StoreError;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Store answering queries from an in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshot: Snapshot,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot JSON file
    ///
    /// # Errors
    /// * `StoreError::Snapshot` - File cannot be opened
    /// * `StoreError::Json` - File is not a valid snapshot
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!("Reading snapshot from: {}", path.display());

        let file = File::open(path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;

        debug!(
            "Snapshot loaded: {} trait rows, {} heroes",
            snapshot.traits.len(),
            snapshot.heroes.len()
        );

        Ok(Self::new(snapshot))
    }
}

impl HeroStore for SnapshotStore {
    fn fetch_traits(&self) -> Result<Vec<TraitRow>, StoreError> {
        let mut rows = self.snapshot.traits.clone();
        rows.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.value.cmp(&b.value)));
        Ok(rows)
    }

    fn fetch_latest_created_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        let latest = self
            .snapshot
            .heroes
            .iter()
            .filter_map(|hero| hero.created_at.as_deref())
            .filter_map(|raw| match parse_created_at(raw) {
                Ok(ts) => Some(ts),
                Err(e) => {
                    warn!("Skipping hero timestamp: {}", e);
                    None
                }
            })
            .max();

        Ok(latest)
    }

    fn fetch_hero(&self, id: u64) -> Result<Option<RawHeroRecord>, StoreError> {
        Ok(self.snapshot.heroes.iter().find(|hero| hero.id == id).cloned())
    }
}
