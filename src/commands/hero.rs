//! Hero command implementation.

use super::models::HeroArgs;
use super::utils::load_catalog;
use crate::lookup::{assess_hero, fetch_hero};
use crate::output::{render_hero, write_report, HeroReport};
use crate::store::HeroStore;
use anyhow::{Context, Result};
use log::info;

/// Execute the hero command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * "Hero not found" for invalid or unknown ids
/// * The store's message when the request fails
/// * File write errors for `--output`
pub fn execute_hero<S: HeroStore + ?Sized>(store: &S, args: HeroArgs) -> Result<()> {
    // Rarities resolve against the catalog, so it loads first
    let catalog = load_catalog(store);

    let hero = fetch_hero(store, &args.id).map_err(|e| anyhow::anyhow!(e.message()))?;
    let traits = assess_hero(&catalog.traits, &hero);

    println!("{}", render_hero(&hero, &traits));

    if let Some(path) = &args.output {
        let report = HeroReport::new(hero, traits);
        write_report(&report, path).context("Failed to write hero report")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(())
}
