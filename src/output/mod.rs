//! Output for the catalog and hero views.
//!
//! This module handles:
//! - Terminal rendering (catalog sections, category bar, hero card)
//! - "Last updated" timestamps in Eastern time
//! - JSON reports written to disk

pub mod json;
pub mod schema;
pub mod text;
pub mod timestamp;

// Re-export main functions
pub use json::write_report;
pub use schema::{HeroReport, TraitsReport};
pub use text::{render_category_bar, render_hero, render_sections};
pub use timestamp::format_last_updated;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
