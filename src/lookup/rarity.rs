//! Join hero attributes against the trait catalog.

use super::hero::{HeroAttribute, HeroRecord};
use crate::aggregator::{display_trait_type, normalize_category, parse_rarity_display, AggregatedTraits};
use crate::utils::config::{
    MYTHIC_MAX_PERCENT, RARE_MAX_PERCENT, RARITY_NOT_AVAILABLE, UNCOMMON_MAX_PERCENT,
};
use serde::{Serialize, Serializer};
use std::fmt;

/// Rarity found for a hero attribute
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedRarity {
    /// Display text of the matching trait entry, e.g. "2.50%"
    Found(String),
    NotAvailable,
}

impl ResolvedRarity {
    pub fn percentage(&self) -> Option<f64> {
        match self {
            Self::Found(display) => parse_rarity_display(display),
            Self::NotAvailable => None,
        }
    }

    pub fn tier(&self) -> RarityTier {
        RarityTier::classify(self)
    }
}

impl fmt::Display for ResolvedRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(display) => f.write_str(display),
            Self::NotAvailable => f.write_str(RARITY_NOT_AVAILABLE),
        }
    }
}

impl Serialize for ResolvedRarity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display emphasis bucket for a rarity percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RarityTier {
    Mythic,
    Rare,
    Uncommon,
    Common,
    Unknown,
}

impl RarityTier {
    /// Bucket a percentage; bounds are inclusive
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage.is_nan() {
            Self::Unknown
        } else if percentage <= MYTHIC_MAX_PERCENT {
            Self::Mythic
        } else if percentage <= RARE_MAX_PERCENT {
            Self::Rare
        } else if percentage <= UNCOMMON_MAX_PERCENT {
            Self::Uncommon
        } else {
            Self::Common
        }
    }

    /// Bucket a resolved rarity, parsing its display text
    pub fn classify(rarity: &ResolvedRarity) -> Self {
        rarity
            .percentage()
            .map(Self::from_percentage)
            .unwrap_or(Self::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mythic => "Mythic",
            Self::Rare => "Rare",
            Self::Uncommon => "Uncommon",
            Self::Common => "Common",
            Self::Unknown => "Unknown",
        }
    }

    /// Terminal color for this tier
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Self::Mythic => "\x1b[35m",   // purple
            Self::Rare => "\x1b[34m",     // blue
            Self::Uncommon => "\x1b[32m", // green
            Self::Common | Self::Unknown => "\x1b[37m",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Find the catalog rarity of one hero attribute
///
/// The trait type goes through the same category normalization as the
/// catalog; the value is compared as text.
pub fn resolve_rarity(traits: &AggregatedTraits, attribute: &HeroAttribute) -> ResolvedRarity {
    let Some(entries) = traits.get(normalize_category(&attribute.trait_type)) else {
        return ResolvedRarity::NotAvailable;
    };

    let value = attribute.value.to_string();

    entries
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| ResolvedRarity::Found(entry.rarity_display.clone()))
        .unwrap_or(ResolvedRarity::NotAvailable)
}

/// One row of a hero card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeRarity {
    /// Label shown for the trait type
    pub label: String,
    pub value: String,
    pub rarity: ResolvedRarity,
    pub tier: RarityTier,
}

/// Resolve every attribute of a hero, in attribute order
pub fn assess_hero(traits: &AggregatedTraits, hero: &HeroRecord) -> Vec<AttributeRarity> {
    hero.attributes
        .iter()
        .map(|attribute| {
            let rarity = resolve_rarity(traits, attribute);
            AttributeRarity {
                label: display_trait_type(&attribute.trait_type).to_string(),
                value: attribute.value.to_string(),
                tier: rarity.tier(),
                rarity,
            }
        })
        .collect()
}
