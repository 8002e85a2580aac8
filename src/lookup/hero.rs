//! Hero records and attribute normalization.
//!
//! The store hands out `attributes` either as a JSON array or as a JSON
//! array encoded in a string. [`normalize_attributes`] is the single place
//! that turns either shape into a typed list; anything unreadable becomes an
//! empty list.

use crate::store::{HeroStore, RawHeroRecord};
use crate::utils::error::LookupError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute value, text or number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for AttributeValue {
    /// Numbers render without a trailing ".0" so they compare equal to
    /// the trait table's text values ("5", not "5.0").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{}", i)
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{}", u)
                } else {
                    write!(f, "{}", n.as_f64().unwrap_or(f64::NAN))
                }
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// One trait of a hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroAttribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

impl HeroAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Hero record with attributes normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub attributes: Vec<HeroAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_rank: Option<u64>,
}

impl From<RawHeroRecord> for HeroRecord {
    fn from(raw: RawHeroRecord) -> Self {
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            image_url: raw.image_url.unwrap_or_default(),
            attributes: normalize_attributes(&raw.attributes),
            rarity_score: raw.rarity_score,
            rarity_rank: raw.rarity_rank,
        }
    }
}

/// Turn the stored attribute field into a typed list
///
/// Accepts a JSON array or a string holding one. Elements that are not
/// `{trait_type, value}` objects are skipped.
pub fn normalize_attributes(raw: &serde_json::Value) -> Vec<HeroAttribute> {
    match raw {
        serde_json::Value::Array(items) => parse_attribute_array(items),
        serde_json::Value::String(text) => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::Array(items)) => parse_attribute_array(&items),
            Ok(other) => {
                warn!("Encoded attributes are not an array: {}", other);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to decode attributes: {}", e);
                Vec::new()
            }
        },
        serde_json::Value::Null => {
            debug!("Hero has no attributes");
            Vec::new()
        }
        other => {
            warn!("Unexpected attributes shape: {}", other);
            Vec::new()
        }
    }
}

fn parse_attribute_array(items: &[serde_json::Value]) -> Vec<HeroAttribute> {
    let mut attributes = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<HeroAttribute>(item.clone()) {
            Ok(attribute) => attributes.push(attribute),
            Err(e) => warn!("Skipping attribute {}: {}", index, e),
        }
    }

    attributes
}

/// Validate a user-supplied hero id
///
/// Only positive integers are accepted. Anything else is reported as
/// "Hero not found" without touching the store.
pub fn parse_hero_id(input: &str) -> Result<u64, LookupError> {
    match input.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            debug!("Rejected hero id input: {:?}", input);
            Err(LookupError::NotFound)
        }
    }
}

/// Look up one hero by the id the user typed
///
/// # Errors
/// * `LookupError::NotFound` - Invalid id, or no hero with that id
/// * `LookupError::Store` - The store request failed
pub fn fetch_hero<S: HeroStore + ?Sized>(store: &S, input: &str) -> Result<HeroRecord, LookupError> {
    let id = parse_hero_id(input)?;

    let raw = store.fetch_hero(id)?.ok_or(LookupError::NotFound)?;

    Ok(HeroRecord::from(raw))
}
