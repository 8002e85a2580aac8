use super::models::StoreArgs;
use crate::aggregator::{load_traits, AggregatedTraits};
use crate::output::format_last_updated;
use crate::store::{HeroStore, HttpStore, SnapshotStore};
use crate::utils::config::{SCHEMA_VERSION, STORE_KEY_ENV, STORE_URL_ENV};
use anyhow::{Context, Result};
use log::{info, warn};

/// Data loaded once at session start
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub traits: AggregatedTraits,

    /// Creation time of the newest hero, already formatted for display
    pub last_updated: Option<String>,
}

/// Validate store arguments
///
/// **Public** - called before any network access
pub fn validate_store_args(args: &StoreArgs) -> Result<()> {
    if args.snapshot.is_some() {
        return Ok(());
    }

    let url = args.url.as_deref().unwrap_or_default();
    if url.is_empty() {
        anyhow::bail!("Store URL is required (--url or {})", STORE_URL_ENV);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("Store URL must start with http:// or https://");
    }

    if args.key.as_deref().unwrap_or_default().is_empty() {
        anyhow::bail!("Store API key is required (--key or {})", STORE_KEY_ENV);
    }

    Ok(())
}

/// Open the store selected by the arguments
pub fn open_store(args: &StoreArgs) -> Result<Box<dyn HeroStore>> {
    validate_store_args(args)?;

    if let Some(path) = &args.snapshot {
        info!("Using snapshot store: {}", path.display());
        let store = SnapshotStore::open(path)
            .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
        return Ok(Box::new(store));
    }

    let url = args.url.clone().unwrap_or_default();
    let key = args.key.clone().unwrap_or_default();

    info!("Using store: {}", url);
    let store = HttpStore::new(url, key).context("Failed to create store client")?;
    Ok(Box::new(store))
}

/// Run the startup queries: trait table, then the newest hero's timestamp
///
/// Never fails. Missing data degrades to an empty catalog.
pub fn load_catalog<S: HeroStore + ?Sized>(store: &S) -> Catalog {
    let traits = load_traits(store);

    let last_updated = match store.fetch_latest_created_at() {
        Ok(latest) => latest.map(|ts| format_last_updated(&ts)),
        Err(e) => {
            warn!("Error fetching last update time: {}", e);
            None
        }
    };

    Catalog { traits, last_updated }
}

/// "Last updated" banner line
pub fn last_updated_line(catalog: &Catalog) -> String {
    format!(
        "🕒 Last updated: {} ET • Data refreshes every ~24 hours",
        catalog.last_updated.as_deref().unwrap_or("unknown")
    )
}

/// Display version information
pub fn display_version() {
    println!("Hero Rarity v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Trait rarity explorer and hero lookup for OnChain Heroes.");
}
