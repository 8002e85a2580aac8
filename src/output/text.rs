//! Terminal rendering of the trait catalog and hero cards.

use crate::aggregator::{is_basic_category, CategorySection, CategorySelection, TraitEntry};
use crate::lookup::{AttributeRarity, HeroRecord, RarityTier};
use std::collections::BTreeSet;

const RESET: &str = "\x1b[0m";
const HEADER: &str = "\x1b[33m";
const BAR_WIDTH: usize = 20;
const RULE_WIDTH: usize = 64;

/// Render catalog sections
///
/// Basic categories and expanded categories list their entries; the rest
/// render as a folded header with an entry count.
pub fn render_sections(
    sections: &[CategorySection],
    expanded: &BTreeSet<String>,
    expand_all: bool,
) -> String {
    if sections.is_empty() {
        return "No trait categories to show".to_string();
    }

    let mut lines = Vec::new();

    for section in sections {
        let open = expand_all || is_basic_category(&section.category) || expanded.contains(&section.category);

        if !open {
            lines.push(format!(
                "{}▶ {}{} ({} traits)",
                HEADER,
                section.category,
                RESET,
                section.entries.len()
            ));
            continue;
        }

        lines.push(format!("{}▼ {}{}", HEADER, section.category, RESET));
        for entry in &section.entries {
            lines.push(render_entry(entry));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// One catalog card as a single line
fn render_entry(entry: &TraitEntry) -> String {
    let percentage = entry.percentage();
    let tier = percentage
        .map(RarityTier::from_percentage)
        .unwrap_or(RarityTier::Unknown);

    format!(
        "  {}{:<32}{} Count: {:>6} {:>9}  {}",
        tier.ansi_color(),
        entry.value,
        RESET,
        entry.count,
        entry.rarity_display,
        rarity_bar(percentage.unwrap_or(0.0))
    )
}

/// Fixed-width bar filled in proportion to the rarity percentage
pub fn rarity_bar(percentage: f64) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Category selector line, the current selection in brackets
pub fn render_category_bar(categories: &[String], selection: &CategorySelection) -> String {
    let current = selection.to_string();

    categories
        .iter()
        .map(|category| {
            if *category == current {
                format!("[{}]", category)
            } else {
                category.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the hero overlay
pub fn render_hero(hero: &HeroRecord, traits: &[AttributeRarity]) -> String {
    let mut lines = Vec::new();

    lines.push("━".repeat(RULE_WIDTH));
    lines.push(format!("{}{}{}", HEADER, hero.name, RESET));

    // Zero rank or score means unranked
    if let Some(rank) = hero.rarity_rank.filter(|rank| *rank > 0) {
        lines.push(format!("  👑 Rarity Rank: #{}", rank));
        if let Some(score) = hero.rarity_score.filter(|score| *score != 0.0) {
            lines.push(format!("     Score: {:.4}", score));
        }
    }

    if !hero.image_url.is_empty() {
        lines.push(format!("  Image: {}", hero.image_url));
    }

    lines.push(String::new());
    lines.push("  Traits".to_string());

    if traits.is_empty() {
        lines.push("  No traits found for this hero".to_string());
    }

    for row in traits {
        lines.push(format!(
            "  {:<18} {:<28} {}{:>8}{}  {}",
            row.label,
            row.value,
            row.tier.ansi_color(),
            row.rarity.to_string(),
            RESET,
            row.tier
        ));
    }

    lines.push("━".repeat(RULE_WIDTH));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ResolvedRarity;

    fn entry(value: &str, rarity: &str) -> TraitEntry {
        TraitEntry {
            value: value.to_string(),
            count: 3,
            rarity_display: rarity.to_string(),
        }
    }

    #[test]
    fn test_rarity_bar() {
        assert_eq!(rarity_bar(0.0), "░".repeat(20));
        assert_eq!(rarity_bar(100.0), "█".repeat(20));
        assert_eq!(rarity_bar(50.0).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(rarity_bar(250.0), "█".repeat(20));
    }

    #[test]
    fn test_folded_section() {
        let sections = vec![CategorySection {
            category: "Weapon".to_string(),
            entries: vec![entry("Axe", "1.00%")],
        }];

        let out = render_sections(&sections, &BTreeSet::new(), false);
        assert!(out.contains("▶ Weapon"));
        assert!(out.contains("(1 traits)"));
        assert!(!out.contains("Axe"));

        let out = render_sections(&sections, &BTreeSet::new(), true);
        assert!(out.contains("Axe"));
    }

    #[test]
    fn test_basic_section_always_open() {
        let sections = vec![CategorySection {
            category: "Type".to_string(),
            entries: vec![entry("Knight", "20.00%")],
        }];

        let out = render_sections(&sections, &BTreeSet::new(), false);
        assert!(out.contains("Knight"));
        assert!(out.contains("20.00%"));
    }

    #[test]
    fn test_category_bar() {
        let categories = vec!["All".to_string(), "Type".to_string()];
        assert_eq!(render_category_bar(&categories, &CategorySelection::All), "[All]  Type");
    }

    #[test]
    fn test_render_hero_without_rank() {
        let hero = HeroRecord {
            id: 3,
            name: "Hero #3".to_string(),
            image_url: String::new(),
            attributes: Vec::new(),
            rarity_score: Some(1.5),
            rarity_rank: None,
        };

        let out = render_hero(&hero, &[]);
        assert!(out.contains("Hero #3"));
        assert!(!out.contains("Rarity Rank"));
        assert!(out.contains("No traits found for this hero"));
    }

    #[test]
    fn test_render_hero_zero_rank_and_score_hidden() {
        let mut hero = HeroRecord {
            id: 4,
            name: "Hero #4".to_string(),
            image_url: String::new(),
            attributes: Vec::new(),
            rarity_score: Some(2.0),
            rarity_rank: Some(0),
        };
        assert!(!render_hero(&hero, &[]).contains("Rarity Rank"));

        hero.rarity_rank = Some(8);
        hero.rarity_score = Some(0.0);
        let out = render_hero(&hero, &[]);
        assert!(out.contains("#8"));
        assert!(!out.contains("Score"));
    }

    #[test]
    fn test_render_hero_with_rank_and_traits() {
        let hero = HeroRecord {
            id: 3,
            name: "Hero #3".to_string(),
            image_url: "https://img/3.png".to_string(),
            attributes: Vec::new(),
            rarity_score: Some(4.123456),
            rarity_rank: Some(12),
        };
        let rows = vec![AttributeRarity {
            label: "Level".to_string(),
            value: "5".to_string(),
            rarity: ResolvedRarity::Found("2.50%".to_string()),
            tier: RarityTier::Rare,
        }];

        let out = render_hero(&hero, &rows);
        assert!(out.contains("#12"));
        assert!(out.contains("Score: 4.1235"));
        assert!(out.contains("2.50%"));
        assert!(out.contains("Rare"));
    }
}
