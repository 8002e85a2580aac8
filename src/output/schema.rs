//! JSON report schema definitions.
//!
//! Reports carry a schema version so downstream tooling can check
//! compatibility.

use crate::aggregator::CategorySection;
use crate::lookup::{AttributeRarity, HeroRecord};
use crate::utils::config::SCHEMA_VERSION;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Catalog view written by `traits --output`
#[derive(Debug, Clone, Serialize)]
pub struct TraitsReport {
    pub version: String,

    /// "Last updated" text from the store, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    pub search: String,

    pub category: String,

    pub sections: Vec<CategorySection>,

    pub generated_at: DateTime<Utc>,
}

impl TraitsReport {
    pub fn new(
        last_updated: Option<String>,
        search: &str,
        category: &str,
        sections: Vec<CategorySection>,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            last_updated,
            search: search.to_string(),
            category: category.to_string(),
            sections,
            generated_at: Utc::now(),
        }
    }
}

/// Hero card written by `hero --output`
#[derive(Debug, Clone, Serialize)]
pub struct HeroReport {
    pub version: String,

    pub hero: HeroRecord,

    pub traits: Vec<AttributeRarity>,

    pub generated_at: DateTime<Utc>,
}

impl HeroReport {
    pub fn new(hero: HeroRecord, traits: Vec<AttributeRarity>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            hero,
            traits,
            generated_at: Utc::now(),
        }
    }
}
