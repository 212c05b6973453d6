//! JSON report schema.
//!
//! The report is an export of derived numbers. It is versioned so that
//! readers can reject files written by an incompatible release.

use crate::aggregator::metrics::AggregateResult;
use crate::aggregator::position::PositionAverages;
use crate::aggregator::trends::Highlight;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// File name the data was loaded from
    pub source: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    pub match_count: usize,

    /// Sum of usable `Minutes` values
    pub total_minutes: f64,

    /// Distinct position groups, sorted
    pub positions: Vec<String>,

    /// Whole-dataset column statistics keyed by metric key
    pub statistics: BTreeMap<String, AggregateResult>,

    /// Whole-dataset bundle, same shape as each `by_position` entry
    pub overall: PositionAverages,

    /// Per-position averages keyed by position label
    pub by_position: BTreeMap<String, PositionAverages>,

    /// Best match per metric
    pub highlights: Vec<Highlight>,
}
