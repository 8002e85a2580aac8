//! Read-only access to the hosted trait and hero tables.

pub mod client;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use client::HttpStore;
pub use snapshot::SnapshotStore;
pub use types::{RawHeroRecord, Snapshot, TraitRow};

use crate::utils::error::StoreError;
use chrono::{DateTime, Utc};

/// Read-only queries the viewer runs against its backing store
///
/// Implementations answer the three queries the viewer needs and never write.
pub trait HeroStore {
    /// All trait rows, ordered by category then value
    fn fetch_traits(&self) -> Result<Vec<TraitRow>, StoreError>;

    /// Creation time of the most recently created hero, if any
    fn fetch_latest_created_at(&self) -> Result<Option<DateTime<Utc>>, StoreError>;

    /// The hero whose id equals `id`
    ///
    /// Returns `None` if no such hero exists.
    fn fetch_hero(&self, id: u64) -> Result<Option<RawHeroRecord>, StoreError>;
}
