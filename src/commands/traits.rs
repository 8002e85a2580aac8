//! Traits command implementation.
//!
//! The traits command:
//! 1. Loads the trait catalog and last-updated time
//! 2. Applies search / category selection
//! 3. Prints the catalog view
//! 4. Optionally writes a JSON report

use super::models::TraitsArgs;
use super::utils::{last_updated_line, load_catalog, Catalog};
use crate::aggregator::{available_categories, expanded_categories, filter_traits, CategorySelection};
use crate::output::{render_category_bar, render_sections, write_report, TraitsReport};
use crate::store::HeroStore;
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::BTreeSet;
use std::time::Instant;

/// Execute the traits command
///
/// **Public** - main entry point called from main.rs
pub fn execute_traits<S: HeroStore + ?Sized>(store: &S, args: TraitsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading trait catalog...");
    let catalog = load_catalog(store);

    info!("Step 2/3: Rendering view (search: {:?}, category: {})", args.search, args.category);
    let expanded = expanded_categories(&catalog.traits, &args.search, &args.category);
    println!(
        "{}",
        render_view(&catalog, &args.search, &args.category, &expanded, args.expand_all)
    );

    if let Some(path) = &args.output {
        info!("Step 3/3: Writing report...");
        let sections = filter_traits(&catalog.traits, &args.search, &args.category);
        let report = TraitsReport::new(
            catalog.last_updated.clone(),
            &args.search,
            &args.category.to_string(),
            sections,
        );
        write_report(&report, path).context("Failed to write traits report")?;
        info!("✓ Report written to: {}", path.display());
    } else {
        info!("Step 3/3: Skipping report (not requested)");
    }

    debug!("Traits command completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Full catalog view: banner, category selector and sections
///
/// The category selector is hidden while a search is active. Sections in
/// `expanded` are unfolded.
pub fn render_view(
    catalog: &Catalog,
    search: &str,
    selection: &CategorySelection,
    expanded: &BTreeSet<String>,
    expand_all: bool,
) -> String {
    let mut lines = vec![last_updated_line(catalog), String::new()];

    if search.is_empty() {
        lines.push(render_category_bar(&available_categories(&catalog.traits), selection));
        lines.push(String::new());
    } else {
        lines.push(format!("🔍 Search: {}", search));
        lines.push(String::new());
    }

    let sections = filter_traits(&catalog.traits, search, selection);
    lines.push(render_sections(&sections, expanded, expand_all));

    lines.join("\n")
}
