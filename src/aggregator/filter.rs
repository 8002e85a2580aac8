//! Search and category selection over aggregated traits.
//!
//! A non-empty search wins over the category selection. Without a search,
//! "All" shows the fixed priority categories and a specific selection shows
//! that one category. Entries inside every returned section are ordered by
//! rarity percentage, rarest first.

use super::traits::{AggregatedTraits, TraitEntry};
use crate::utils::config::{ALL_CATEGORIES, CATEGORY_ORDER};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Category selector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl std::str::FromStr for CategorySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() || s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Category(s.to_string())
        })
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Category(name) => f.write_str(name),
        }
    }
}

/// One category as presented, entries already sorted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: String,
    pub entries: Vec<TraitEntry>,
}

/// Compute the sections to display
///
/// **Public** - main entry point for the catalog view
///
/// # Arguments
/// * `traits` - Session trait mapping
/// * `search` - Free-text search, matched case-insensitively as a substring of values
/// * `selection` - Category selector state, ignored while `search` is non-empty
pub fn filter_traits(
    traits: &AggregatedTraits,
    search: &str,
    selection: &CategorySelection,
) -> Vec<CategorySection> {
    if !search.is_empty() {
        let needle = search.to_lowercase();

        return ordered_categories(traits)
            .into_iter()
            .filter_map(|category| {
                let matching: Vec<TraitEntry> = traits
                    .get(category)
                    .unwrap_or_default()
                    .iter()
                    .filter(|entry| matches_search(entry, &needle))
                    .cloned()
                    .collect();

                (!matching.is_empty()).then(|| section(category, matching))
            })
            .collect();
    }

    match selection {
        CategorySelection::All => CATEGORY_ORDER
            .iter()
            .filter_map(|category| {
                traits
                    .get(category)
                    .map(|entries| section(category, entries.to_vec()))
            })
            .collect(),
        CategorySelection::Category(name) => traits
            .get(name)
            .map(|entries| vec![section(name, entries.to_vec())])
            .unwrap_or_default(),
    }
}

/// Category selector options: "All" plus each priority category that has entries
pub fn available_categories(traits: &AggregatedTraits) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES)
        .chain(CATEGORY_ORDER.iter().copied().filter(|c| traits.contains(c)))
        .map(str::to_string)
        .collect()
}

/// Categories whose entries are shown unfolded
///
/// With a search, every category holding a match. With a specific
/// selection, that category. Otherwise none.
pub fn expanded_categories(
    traits: &AggregatedTraits,
    search: &str,
    selection: &CategorySelection,
) -> BTreeSet<String> {
    if !search.is_empty() {
        let needle = search.to_lowercase();
        return traits
            .iter()
            .filter(|(_, entries)| entries.iter().any(|entry| matches_search(entry, &needle)))
            .map(|(category, _)| category.to_string())
            .collect();
    }

    match selection {
        CategorySelection::All => BTreeSet::new(),
        CategorySelection::Category(name) => BTreeSet::from([name.clone()]),
    }
}

/// Flip one category between folded and unfolded
///
/// Returns `true` when the category is now expanded.
pub fn toggle_category(expanded: &mut BTreeSet<String>, category: &str) -> bool {
    if expanded.remove(category) {
        false
    } else {
        expanded.insert(category.to_string());
        true
    }
}

/// Sort entries by numeric rarity, ascending
///
/// Stable, so equal percentages keep their store order. Unparseable rarity
/// text sorts last.
pub fn sort_by_rarity(entries: &mut [TraitEntry]) {
    entries.sort_by(|a, b| match (a.percentage(), b.percentage()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Priority categories first, then the rest by name
fn ordered_categories(traits: &AggregatedTraits) -> Vec<&str> {
    let mut ordered: Vec<&str> = Vec::with_capacity(traits.len());

    for &category in CATEGORY_ORDER {
        if traits.contains(category) {
            ordered.push(category);
        }
    }

    for (category, _) in traits.iter() {
        if !CATEGORY_ORDER.contains(&category) {
            ordered.push(category);
        }
    }

    ordered
}

fn matches_search(entry: &TraitEntry, needle_lower: &str) -> bool {
    entry.value.to_lowercase().contains(needle_lower)
}

fn section(category: &str, mut entries: Vec<TraitEntry>) -> CategorySection {
    sort_by_rarity(&mut entries);
    CategorySection {
        category: category.to_string(),
        entries,
    }
}
