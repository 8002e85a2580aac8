mod common;

use common::sample_traits;
use hero_rarity::aggregator::{aggregate_traits, filter_traits, CategorySelection, TraitEntry};
use hero_rarity::store::TraitRow;
use pretty_assertions::assert_eq;

fn category_names(sections: &[hero_rarity::aggregator::CategorySection]) -> Vec<&str> {
    sections.iter().map(|s| s.category.as_str()).collect()
}

fn values(entries: &[TraitEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.value.as_str()).collect()
}

#[test]
fn test_all_view_uses_priority_order() {
    let traits = aggregate_traits(&sample_traits());
    let sections = filter_traits(&traits, "", &CategorySelection::All);

    assert_eq!(
        category_names(&sections),
        vec!["Type", "Level", "Head", "Weapon", "Bottom", "1/1"]
    );
}

#[test]
fn test_single_category() {
    let traits = aggregate_traits(&sample_traits());
    let sections = filter_traits(&traits, "", &CategorySelection::Category("Weapon".to_string()));

    assert_eq!(category_names(&sections), vec!["Weapon"]);
    assert_eq!(values(&sections[0].entries), vec!["Axe", "Sword"]);
}

#[test]
fn test_unknown_category_is_empty() {
    let traits = aggregate_traits(&sample_traits());
    let sections = filter_traits(&traits, "", &CategorySelection::Category("Shoes".to_string()));
    assert!(sections.is_empty());
}

#[test]
fn test_search_case_insensitive_substring() {
    let traits = aggregate_traits(&[
        TraitRow::new("Head", "Dragon Helm", 8, 0.8),
        TraitRow::new("Weapon", "Sword", 250, 25.0),
    ]);

    let sections = filter_traits(&traits, "drag", &CategorySelection::All);
    assert_eq!(category_names(&sections), vec!["Head"]);
    assert_eq!(values(&sections[0].entries), vec!["Dragon Helm"]);

    let upper = filter_traits(&traits, "HELM", &CategorySelection::All);
    assert_eq!(values(&upper[0].entries), vec!["Dragon Helm"]);
}

#[test]
fn test_search_ignores_category_selection() {
    let traits = aggregate_traits(&sample_traits());
    let sections = filter_traits(&traits, "dragon", &CategorySelection::Category("Weapon".to_string()));

    // Background is outside the priority list and only reachable via search
    assert_eq!(category_names(&sections), vec!["Head", "Background"]);
}

#[test]
fn test_search_without_match() {
    let traits = aggregate_traits(&sample_traits());
    assert!(filter_traits(&traits, "unicorn", &CategorySelection::All).is_empty());
}

#[test]
fn test_entries_sorted_by_numeric_rarity() {
    // Store order is by value text; "10" sorts before "5" lexically
    let traits = aggregate_traits(&sample_traits());
    let sections = filter_traits(&traits, "", &CategorySelection::All);

    let level = sections.iter().find(|s| s.category == "Level").unwrap();
    assert_eq!(values(&level.entries), vec!["5", "10"]);

    for section in &sections {
        let percentages: Vec<f64> = section.entries.iter().map(|e| e.percentage().unwrap()).collect();
        assert!(
            percentages.windows(2).all(|w| w[0] <= w[1]),
            "{} not ordered: {:?}",
            section.category,
            percentages
        );
    }
}

#[test]
fn test_numeric_not_lexical_ordering() {
    let traits = aggregate_traits(&[
        TraitRow::new("Weapon", "Bow", 1, 10.0),
        TraitRow::new("Weapon", "Club", 1, 9.5),
        TraitRow::new("Weapon", "Dagger", 1, 100.0),
    ]);

    let sections = filter_traits(&traits, "", &CategorySelection::All);
    assert_eq!(values(&sections[0].entries), vec!["Club", "Bow", "Dagger"]);
}

#[test]
fn test_filter_is_idempotent_and_pure() {
    let traits = aggregate_traits(&sample_traits());
    let before = traits.clone();

    for (search, selection) in [
        ("", CategorySelection::All),
        ("", CategorySelection::Category("Head".to_string())),
        ("a", CategorySelection::All),
    ] {
        let first = filter_traits(&traits, search, &selection);
        let second = filter_traits(&traits, search, &selection);
        assert_eq!(first, second);
    }

    assert_eq!(traits, before);
}
