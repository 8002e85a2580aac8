//! Hero lookup and per-trait rarity resolution.
//!
//! This module handles:
//! - Validating hero ids and fetching one hero record
//! - Normalizing attribute payloads at ingestion
//! - Joining attributes against the trait catalog and tiering the result
//! - Lookup session state (active hero, overlay, loading, error)

pub mod hero;
pub mod rarity;
pub mod session;

// Re-export main types
pub use hero::{fetch_hero, normalize_attributes, parse_hero_id, AttributeValue, HeroAttribute, HeroRecord};
pub use rarity::{assess_hero, resolve_rarity, AttributeRarity, RarityTier, ResolvedRarity};
pub use session::LookupSession;
