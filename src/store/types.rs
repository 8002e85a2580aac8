//! Row types returned by the backing store.
//!
//! Field names follow the store's column names. Shapes that vary between
//! rows (rarity as number or string, attributes as array or encoded text)
//! are accepted here and normalized later.

use crate::utils::error::StoreError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the traits table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitRow {
    /// Raw category label, possibly a legacy name
    pub category: String,

    /// Trait value text
    pub value: String,

    /// Number of heroes carrying this value
    #[serde(default)]
    pub count: u64,

    /// Precomputed rarity percentage in [0, 100]
    #[serde(deserialize_with = "deserialize_rarity")]
    pub rarity: f64,
}

impl TraitRow {
    pub fn new(category: impl Into<String>, value: impl Into<String>, count: u64, rarity: f64) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
            count,
            rarity,
        }
    }
}

/// One row of the heroes table, as stored
///
/// `attributes` stays untyped: it arrives either as a JSON array or as a
/// JSON array serialized into a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHeroRecord {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub attributes: serde_json::Value,

    #[serde(default)]
    pub rarity_score: Option<f64>,

    #[serde(default)]
    pub rarity_rank: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Projection used by the "last updated" query
#[derive(Debug, Deserialize)]
pub struct LatestHero {
    pub created_at: String,
}

/// Offline copy of both tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub traits: Vec<TraitRow>,

    #[serde(default)]
    pub heroes: Vec<RawHeroRecord>,
}

/// Accept rarity as a JSON number or a numeric string
fn deserialize_rarity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    parse_json_f64(&value).map_err(serde::de::Error::custom)
}

/// Helper to read an f64 from a JSON number or string
fn parse_json_f64(value: &serde_json::Value) -> Result<f64, String> {
    if let Some(n) = value.as_f64() {
        Ok(n)
    } else if let Some(s) = value.as_str() {
        s.trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|e| format!("Invalid rarity value '{}': {}", s, e))
    } else {
        Err(format!("Expected number or string for rarity, found {}", value))
    }
}

/// Parse a `created_at` column value
///
/// Accepts RFC 3339 timestamps and offset-less timestamps, which are taken as UTC.
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| StoreError::InvalidResponse(format!("Invalid created_at timestamp: {}", raw)))
}
