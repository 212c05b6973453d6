//! Assemble a `PlayerReport` from a dataset.

use super::schema::PlayerReport;
use crate::aggregator::metrics::{aggregate, sum};
use crate::aggregator::position::{averages_by_position, position_averages};
use crate::aggregator::trends::highlights;
use crate::catalog::METRICS;
use crate::session::Dataset;
use crate::utils::config::{MINUTES_FIELD, SCHEMA_VERSION};
use log::info;

/// Build a report for every match in a dataset
///
/// **Public** - main entry point for report export
///
/// The report always covers the whole dataset; position filters only
/// narrow the terminal views.
///
/// # Arguments
/// * `dataset` - Active dataset
/// * `source` - Label stored in the report (usually the CSV file name)
///
/// # Returns
/// Report with overall statistics, per-position averages and highlights
pub fn build_report(dataset: &Dataset, source: &str) -> PlayerReport {
    let rows = dataset.records();

    let statistics = METRICS
        .iter()
        .map(|metric| (metric.key.to_string(), aggregate(rows, metric.field)))
        .collect();

    let by_position = averages_by_position(rows);
    let positions = by_position.keys().cloned().collect();

    let report = PlayerReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        match_count: rows.len(),
        total_minutes: sum(rows, MINUTES_FIELD),
        positions,
        statistics,
        overall: position_averages(rows),
        by_position,
        highlights: highlights(rows),
    };

    info!(
        "Built report: {} matches, {} positions, {} highlights",
        report.match_count,
        report.positions.len(),
        report.highlights.len()
    );

    report
}
