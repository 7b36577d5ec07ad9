/// Decimal precision for percentages and displayed amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Page size used by the directory and dashboard tables
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Reporting currency used when the settings don't name one
pub const DEFAULT_REPORTING_CURRENCY: &str = "PHP";

/// Currency assumed for a funding round that doesn't record one
pub const DEFAULT_ROUND_CURRENCY: &str = "USD";

/// Placeholder for display-only values that are absent
pub const NOT_AVAILABLE: &str = "N/A";

/// Top-company label for an empty portfolio
pub const NO_TOP_COMPANY: &str = "None";

/// Location label when a profile has no address parts
pub const LOCATION_NOT_AVAILABLE: &str = "Location not available";

/// Words kept in a directory description excerpt
pub const DESCRIPTION_EXCERPT_WORDS: usize = 15;

/// Separator used when flattening nested values into searchable text
pub const SEARCH_FIELD_SEPARATOR: &str = " ";

/// Maximum number of profile-picture fetches in flight at once
pub const RESOURCE_FETCH_BATCH_SIZE: usize = 8;
