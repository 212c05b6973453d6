//! Derivation engine over parsed match rows.
//!
//! This module turns a flat table of matches into:
//! - Column statistics and max lookups
//! - Minutes-weighted per-90 and per-minute rates
//! - Position groups and per-position averages
//! - Fixed-width histograms
//! - Trend series, rankings and highlights
//!
//! Every function is pure and accepts owned or borrowed rows.

pub mod histogram;
pub mod metrics;
pub mod per_ninety;
pub mod position;
pub mod trends;

// Re-export main types and functions
pub use histogram::{bin_count, histogram, histogram_with, HistogramBin};
pub use metrics::{
    aggregate, average, max_lookup, max_value, sum, summarize, usable_values, AggregateResult,
};
pub use per_ninety::{per_minute, per_ninety, preferred_per_ninety, rate_per};
pub use position::{
    averages_by_position, filter_by_position, group_by_position, has_position_comparison,
    position_averages, position_count, MetricAverages, PositionAverages, PositionFilter,
};
pub use trends::{highlights, metric_highlight, rank_matches, trend_series, Highlight, TrendPoint};
