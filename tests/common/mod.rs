#![allow(dead_code)]

use chrono::{DateTime, Utc};
use hero_rarity::store::{HeroStore, RawHeroRecord, TraitRow};
use hero_rarity::utils::error::StoreError;
use serde_json::json;
use std::cell::Cell;

/// In-memory store that counts hero queries
#[derive(Default)]
pub struct MemoryStore {
    pub traits: Vec<TraitRow>,
    pub heroes: Vec<RawHeroRecord>,
    pub latest: Option<DateTime<Utc>>,
    pub fail: bool,
    pub hero_queries: Cell<usize>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl HeroStore for MemoryStore {
    fn fetch_traits(&self) -> Result<Vec<TraitRow>, StoreError> {
        if self.fail {
            return Err(StoreError::InvalidResponse("HTTP 503: unavailable".to_string()));
        }
        Ok(self.traits.clone())
    }

    fn fetch_latest_created_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        if self.fail {
            return Err(StoreError::InvalidResponse("HTTP 503: unavailable".to_string()));
        }
        Ok(self.latest)
    }

    fn fetch_hero(&self, id: u64) -> Result<Option<RawHeroRecord>, StoreError> {
        self.hero_queries.set(self.hero_queries.get() + 1);
        if self.fail {
            return Err(StoreError::InvalidResponse("HTTP 503: unavailable".to_string()));
        }
        Ok(self.heroes.iter().find(|h| h.id == id).cloned())
    }
}

pub fn sample_traits() -> Vec<TraitRow> {
    vec![
        TraitRow::new("Background", "Dragon Sky", 2, 0.2),
        TraitRow::new("Bottom", "Kilt", 90, 9.0),
        TraitRow::new("Head", "Dragon Helm", 8, 0.8),
        TraitRow::new("Head", "Iron Cap", 300, 30.0),
        TraitRow::new("Name", "Zephyr", 1, 0.1),
        TraitRow::new("Season 1 Level", "10", 50, 5.0),
        TraitRow::new("Season 1 Level", "5", 20, 2.5),
        TraitRow::new("Type", "Knight", 400, 40.0),
        TraitRow::new("Type", "Mage", 100, 10.0),
        TraitRow::new("Weapon", "Axe", 40, 4.0),
        TraitRow::new("Weapon", "Sword", 250, 25.0),
    ]
}

pub fn sample_hero(id: u64) -> RawHeroRecord {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Hero #{}", id),
        "image_url": format!("https://img.example/{}.png", id),
        "attributes": [
            {"trait_type": "Type", "value": "Mage"},
            {"trait_type": "Season 1 Level", "value": 5},
            {"trait_type": "Head", "value": "Dragon Helm"},
            {"trait_type": "Weapon", "value": "Sword"},
            {"trait_type": "Name", "value": "Aegis"}
        ],
        "rarity_score": 3.14159,
        "rarity_rank": 17
    }))
    .unwrap()
}

pub fn sample_store() -> MemoryStore {
    MemoryStore {
        traits: sample_traits(),
        heroes: vec![sample_hero(1), sample_hero(42)],
        ..Default::default()
    }
}
