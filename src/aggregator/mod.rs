//! Aggregation of trait rows into a searchable catalog.
//!
//! This module transforms raw trait rows into:
//! - Normalized category keys
//! - Per-category entry lists with display rarity
//! - Filtered, rarity-ordered sections for display

pub mod category;
pub mod filter;
pub mod traits;

// Re-export main types and functions
pub use category::{display_trait_type, is_basic_category, normalize_category};
pub use filter::{
    available_categories, expanded_categories, filter_traits, sort_by_rarity, toggle_category,
    CategorySection, CategorySelection,
};
pub use traits::{
    aggregate_traits, format_rarity, load_traits, parse_rarity_display, AggregatedTraits,
    TraitEntry,
};
