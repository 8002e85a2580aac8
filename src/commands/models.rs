use crate::aggregator::CategorySelection;
use std::path::PathBuf;

/// Where the viewer reads its tables from
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct StoreArgs {
    /// Base URL of the hosted store
    pub url: Option<String>,

    /// Anonymous API key
    pub key: Option<String>,

    /// Offline snapshot file; takes precedence over url/key
    pub snapshot: Option<PathBuf>,
}

/// Arguments for the traits command
#[derive(Debug, Clone, Default)]
pub struct TraitsArgs {
    /// Free-text search over trait values
    pub search: String,

    /// Category selector state
    pub category: CategorySelection,

    /// Unfold every category
    pub expand_all: bool,

    /// Path for a JSON report (optional)
    pub output: Option<PathBuf>,
}

/// Arguments for the hero command
#[derive(Debug, Clone, Default)]
pub struct HeroArgs {
    /// Hero id as typed by the user
    pub id: String,

    /// Path for a JSON report (optional)
    pub output: Option<PathBuf>,
}
