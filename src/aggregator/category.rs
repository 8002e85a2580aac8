//! Category key normalization.
//!
//! The store still carries legacy category labels. Grouping and the hero
//! rarity join both go through [`normalize_category`], so a trait row and a
//! hero attribute with the same label always land on the same key.

use crate::utils::config::{
    BASIC_CATEGORIES, LEGACY_LEVEL_CATEGORY, LEGACY_NAME_CATEGORY, LEVEL_CATEGORY,
    ONE_OF_ONE_CATEGORY,
};

/// Map a raw category label to its grouping key
///
/// `"Season 1 Level"` becomes `"Level"`, `"Name"` becomes `"1/1"`,
/// anything else is returned unchanged.
pub fn normalize_category(raw: &str) -> &str {
    match raw {
        LEGACY_LEVEL_CATEGORY => LEVEL_CATEGORY,
        LEGACY_NAME_CATEGORY => ONE_OF_ONE_CATEGORY,
        other => other,
    }
}

/// Label shown next to a hero attribute
///
/// Only the level rename applies here; one-of-one names keep their own label.
pub fn display_trait_type(raw: &str) -> &str {
    if raw == LEGACY_LEVEL_CATEGORY {
        LEVEL_CATEGORY
    } else {
        raw
    }
}

/// Categories that always render their entries
pub fn is_basic_category(category: &str) -> bool {
    BASIC_CATEGORIES.contains(&category)
}
