//! First-half vs second-half comparison.

use super::delta::Delta;
use crate::aggregator::metrics::{average, max_value};
use crate::catalog::{halves_metrics, MetricDescriptor};
use crate::parser::schema::MatchRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Half-over-half figures for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalvesComparison {
    pub metric: String,
    pub title: String,
    pub unit: String,
    pub first_half_avg: f64,
    pub second_half_avg: f64,
    pub first_half_max: f64,
    pub second_half_max: f64,

    /// Baseline is the first half
    pub delta: Delta,
}

/// Compare halves for one metric
///
/// **Public** - main entry point for the halves view
///
/// # Returns
/// `None` when the metric has no half split in the catalog
pub fn compare_halves<R: Borrow<MatchRecord>>(
    rows: &[R],
    metric: &MetricDescriptor,
) -> Option<HalvesComparison> {
    let first = metric.first_half_field?;
    let second = metric.second_half_field?;

    let first_half_avg = average(rows, first);
    let second_half_avg = average(rows, second);

    Some(HalvesComparison {
        metric: metric.key.to_string(),
        title: metric.title.to_string(),
        unit: metric.unit.to_string(),
        first_half_avg,
        second_half_avg,
        first_half_max: max_value(rows, first),
        second_half_max: max_value(rows, second),
        delta: Delta::new(first_half_avg, second_half_avg),
    })
}

/// Compare halves for every metric that has a split
pub fn compare_all_halves<R: Borrow<MatchRecord>>(rows: &[R]) -> Vec<HalvesComparison> {
    halves_metrics()
        .filter_map(|metric| compare_halves(rows, metric))
        .collect()
}
