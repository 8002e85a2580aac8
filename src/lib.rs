//! Hero Rarity
//!
//! Trait rarity explorer and hero lookup for the OnChain Heroes
//! collection.
//!
//! Rarity percentages, scores and ranks are computed upstream and read
//! from a hosted table store. This crate groups, filters and joins them:
//!
//! - [`aggregator`] builds the per-category trait catalog and its views
//! - [`lookup`] fetches a hero and resolves each trait's rarity tier
//! - [`store`] reads the trait and hero tables (HTTP or snapshot file)
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install hero-rarity
//! hero-rarity --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod lookup;
pub mod output;
pub mod store;
pub mod utils;
