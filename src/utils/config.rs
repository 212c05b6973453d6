//! Configuration and constants shared by the engine and the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.1.0";

// Categorical columns
pub const MATCH_FIELD: &str = "Match";
pub const DATE_FIELD: &str = "Date";
pub const POSITION_FIELD: &str = "Position Group";

// Playing-time columns
pub const MINUTES_FIELD: &str = "Minutes";
pub const TIP_MINUTES_FIELD: &str = "Minutes TIP";
pub const OTIP_MINUTES_FIELD: &str = "Minutes OTIP";

// Columns read directly by the position bundle
pub const PEAK_SPEED_FIELD: &str = "PSV-99";
pub const TIP_DISTANCE_PER_MIN_FIELD: &str = "M/min TIP";
pub const OTIP_DISTANCE_PER_MIN_FIELD: &str = "M/min OTIP";

/// Label for rows without a usable position group
pub const UNKNOWN_POSITION: &str = "Unknown";

/// Minutes in a full match, the per-90 scale factor
pub const MINUTES_PER_MATCH: f64 = 90.0;

/// Cell literals that never count as numbers, even when the parser would accept them
pub const INVALID_LITERALS: &[&str] = &["null", "NaN"];

/// Placeholder rendered for missing or non-comparable values
pub const NOT_AVAILABLE: &str = "N/A";

/// Upper bound on the number of histogram bins a binning may produce
pub const MAX_BINS: usize = 10_000;
