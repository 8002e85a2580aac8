//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod browse;
pub mod hero;
pub mod models;
pub mod traits;
pub mod utils;

// Re-export main command functions
pub use browse::{execute_browse, BrowseCommand};
pub use hero::execute_hero;
pub use models::{HeroArgs, StoreArgs, TraitsArgs};
pub use traits::{execute_traits, render_view};
pub use utils::{display_version, load_catalog, open_store, validate_store_args, Catalog};
