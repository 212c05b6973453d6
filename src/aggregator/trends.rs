//! Per-match series, rankings and highlights.

use super::metrics::{average, max_lookup};
use crate::catalog::{MetricDescriptor, METRICS};
use crate::parser::schema::MatchRecord;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// One match on a trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 1-based position in chronological order
    pub index: usize,

    /// Axis label, `Match n`
    pub label: String,

    /// Match name, falling back to the axis label
    pub match_name: String,

    /// Raw date text as exported
    pub date: Option<String>,

    pub position: String,

    /// `None` when the cell is missing or malformed
    pub value: Option<f64>,
}

/// Best match for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub metric: String,
    pub title: String,
    pub unit: String,
    pub best_match: String,
    pub best_date: Option<String>,
    pub value: f64,
    pub average: f64,
    pub max: f64,

    /// `average / max × 100`, capped at 100; 0 when max is 0
    pub percent_of_max: f64,
}

fn point(index: usize, record: &MatchRecord, field: &str) -> TrendPoint {
    let label = format!("Match {}", index);
    TrendPoint {
        index,
        match_name: record.match_name().unwrap_or_else(|| label.clone()),
        label,
        date: record.date_text(),
        position: record.position(),
        value: record.number(field),
    }
}

/// Build a per-match series for a column
///
/// **Public** - main entry point for trend charts
///
/// Rows are taken in their current (chronological) order and every row
/// yields a point, so gaps stay visible.
pub fn trend_series<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> Vec<TrendPoint> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| point(i + 1, r.borrow(), field))
        .collect()
}

/// Matches ordered by a column, best first
///
/// Unusable values sort last; ties keep chronological order.
pub fn rank_matches<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> Vec<TrendPoint> {
    let mut points = trend_series(rows, field);
    points.sort_by(|a, b| match (a.value, b.value) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    points
}

/// Highlight for one metric, `None` when no row has a usable value
pub fn metric_highlight<R: Borrow<MatchRecord>>(rows: &[R], metric: &MetricDescriptor) -> Option<Highlight> {
    let (best, max) = max_lookup(rows, metric.field)?;
    let avg = average(rows, metric.field);
    let percent_of_max = if max > 0.0 {
        (avg / max * 100.0).min(100.0)
    } else {
        0.0
    };

    Some(Highlight {
        metric: metric.key.to_string(),
        title: metric.title.to_string(),
        unit: metric.unit.to_string(),
        best_match: best.match_name().unwrap_or_else(|| "Unknown match".to_string()),
        best_date: best.date_text(),
        value: max,
        average: avg,
        max,
        percent_of_max,
    })
}

/// Highlights for every catalog metric with data
///
/// **Public** - feeds the overview and the report
pub fn highlights<R: Borrow<MatchRecord>>(rows: &[R]) -> Vec<Highlight> {
    METRICS
        .iter()
        .filter_map(|metric| metric_highlight(rows, metric))
        .collect()
}
