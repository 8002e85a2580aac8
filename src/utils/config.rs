//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for store requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// PostgREST layout of the hosted store
pub const REST_PATH: &str = "rest/v1";
pub const TRAITS_TABLE: &str = "traits";
pub const HEROES_TABLE: &str = "heroes";

/// Media type asking PostgREST for a single object instead of an array.
/// Zero matching rows comes back as HTTP 406.
pub const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// Display order of the "All" view. Categories missing here only show up in search.
pub const CATEGORY_ORDER: &[&str] = &["Type", "Level", "Top", "Head", "Eyes", "Weapon", "Bottom", "1/1"];

/// Categories rendered expanded regardless of selection
pub const BASIC_CATEGORIES: &[&str] = &["Type", "Level"];

/// Sentinel for "no category filter"
pub const ALL_CATEGORIES: &str = "All";

// Legacy category names in the store and the key they are grouped under
pub const LEGACY_LEVEL_CATEGORY: &str = "Season 1 Level";
pub const LEVEL_CATEGORY: &str = "Level";
pub const LEGACY_NAME_CATEGORY: &str = "Name";
pub const ONE_OF_ONE_CATEGORY: &str = "1/1";

/// Resolved rarity when a hero attribute has no matching trait entry
pub const RARITY_NOT_AVAILABLE: &str = "N/A";

// Tier upper bounds, inclusive, in percent
pub const MYTHIC_MAX_PERCENT: f64 = 1.0;
pub const RARE_MAX_PERCENT: f64 = 5.0;
pub const UNCOMMON_MAX_PERCENT: f64 = 10.0;

/// Fallback message for lookup failures with no message of their own
pub const GENERIC_LOOKUP_ERROR: &str = "Failed to fetch hero data";

// Environment variables for the store connection
pub const STORE_URL_ENV: &str = "SUPABASE_URL";
pub const STORE_KEY_ENV: &str = "SUPABASE_ANON_KEY";
