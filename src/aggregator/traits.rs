//! Group trait rows into per-category entry lists.
//!
//! Each row becomes one entry under its normalized category, in input order.
//! The rarity is stored as display text ("2.50%"); numeric comparisons go
//! through [`parse_rarity_display`].

use super::category::normalize_category;
use crate::store::{HeroStore, TraitRow};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single trait value inside a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitEntry {
    /// Trait value text
    pub value: String,

    /// Number of heroes carrying this value
    pub count: u64,

    /// Rarity with two decimals and a percent sign, e.g. "2.50%"
    #[serde(rename = "rarity")]
    pub rarity_display: String,
}

impl TraitEntry {
    /// Numeric rarity percentage, if the display text parses
    pub fn percentage(&self) -> Option<f64> {
        parse_rarity_display(&self.rarity_display)
    }
}

/// Trait entries keyed by normalized category
///
/// Built once per session by [`aggregate_traits`] and then only read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedTraits {
    categories: BTreeMap<String, Vec<TraitEntry>>,
}

impl AggregatedTraits {
    /// Empty mapping, used when traits are not (yet) loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of one category
    pub fn get(&self, category: &str) -> Option<&[TraitEntry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Categories and their entries, ordered by category name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TraitEntry])> {
        self.categories
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
    }

    fn push(&mut self, category: &str, entry: TraitEntry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(entry);
    }
}

/// Group trait rows by normalized category
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `rows` - Trait rows as returned by the store (ordered by category, value)
///
/// # Returns
/// One entry per input row. Duplicated (category, value) pairs are kept.
pub fn aggregate_traits(rows: &[TraitRow]) -> AggregatedTraits {
    debug!("Aggregating {} trait rows", rows.len());

    let mut traits = AggregatedTraits::new();

    for row in rows {
        traits.push(
            normalize_category(&row.category),
            TraitEntry {
                value: row.value.clone(),
                count: row.count,
                rarity_display: format_rarity(row.rarity),
            },
        );
    }

    debug!(
        "Aggregated into {} categories ({} entries)",
        traits.len(),
        traits.entry_count()
    );

    traits
}

/// Fetch and aggregate the trait table
///
/// A failed or empty fetch yields an empty mapping. The failure is logged
/// and not returned.
pub fn load_traits<S: HeroStore + ?Sized>(store: &S) -> AggregatedTraits {
    match store.fetch_traits() {
        Ok(rows) if rows.is_empty() => {
            warn!("Trait table returned no rows");
            AggregatedTraits::new()
        }
        Ok(rows) => {
            let traits = aggregate_traits(&rows);
            info!(
                "Loaded {} trait values in {} categories",
                traits.entry_count(),
                traits.len()
            );
            traits
        }
        Err(e) => {
            warn!("Error fetching traits: {}", e);
            AggregatedTraits::new()
        }
    }
}

/// Render a rarity percentage for display
pub fn format_rarity(rarity: f64) -> String {
    format!("{:.2}%", rarity)
}

/// Parse display text such as "2.50%" back into a percentage
pub fn parse_rarity_display(display: &str) -> Option<f64> {
    display
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rarity() {
        assert_eq!(format_rarity(2.5), "2.50%");
        assert_eq!(format_rarity(0.0), "0.00%");
        assert_eq!(format_rarity(100.0), "100.00%");
        assert_eq!(format_rarity(12.3456), "12.35%");
    }

    #[test]
    fn test_parse_rarity_display() {
        assert_eq!(parse_rarity_display("2.50%"), Some(2.5));
        assert_eq!(parse_rarity_display("10%"), Some(10.0));
        assert_eq!(parse_rarity_display("N/A"), None);
        assert_eq!(parse_rarity_display("NaN%"), None);
    }

    #[test]
    fn test_aggregate_preserves_input_order() {
        let rows = vec![
            TraitRow::new("Weapon", "Sword", 40, 8.0),
            TraitRow::new("Weapon", "Axe", 5, 1.0),
        ];

        let traits = aggregate_traits(&rows);
        let values: Vec<_> = traits.get("Weapon").unwrap().iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["Sword", "Axe"]);
    }

    #[test]
    fn test_aggregate_keeps_duplicates() {
        let rows = vec![
            TraitRow::new("Head", "Cap", 3, 0.3),
            TraitRow::new("Head", "Cap", 3, 0.3),
        ];

        let traits = aggregate_traits(&rows);
        assert_eq!(traits.get("Head").unwrap().len(), 2);
    }

    #[test]
    fn test_aggregate_empty() {
        let traits = aggregate_traits(&[]);
        assert!(traits.is_empty());
        assert_eq!(traits.entry_count(), 0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let traits = aggregate_traits(&[TraitRow::new("Name", "Aegis", 1, 0.01)]);
        let json = serde_json::to_value(&traits).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"1/1": [{"value": "Aegis", "count": 1, "rarity": "0.01%"}]})
        );
    }
}
