//! Descriptive statistics over a column of match rows.
//!
//! Every function here screens cells through the value sanitizer first, so
//! missing and malformed values are excluded rather than counted as zero.
//! Degenerate inputs produce zeros, never NaN.

use crate::parser::schema::MatchRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Summary statistics for one column
///
/// **Public** - returned from aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Number of usable samples
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Sorted-middle median (mean of the two middle values for even counts)
    pub median: f64,

    pub min: f64,
    pub max: f64,

    /// Population standard deviation (divides by N)
    pub std_dev: f64,
}

impl AggregateResult {
    /// True when no usable samples contributed
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "n={} | mean: {:.2} | median: {:.2} | min: {:.2} | max: {:.2} | sd: {:.2}",
            self.count, self.mean, self.median, self.min, self.max, self.std_dev
        )
    }
}

/// Extract the usable numeric values of a column
///
/// **Public** - building block for every other statistic
pub fn usable_values<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> Vec<f64> {
    rows.iter().filter_map(|r| r.borrow().number(field)).collect()
}

/// Aggregate a column
///
/// **Public** - main entry point for column statistics
///
/// # Arguments
/// * `rows` - Match rows (owned or borrowed)
/// * `field` - Exact column name
///
/// # Returns
/// Statistics over usable values only; all zeros when there are none
pub fn aggregate<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> AggregateResult {
    let values = usable_values(rows, field);
    debug!("Aggregating '{}': {} of {} rows usable", field, values.len(), rows.len());
    summarize(&values)
}

/// Compute statistics over already-sanitized values
///
/// **Public** - used when values come from somewhere other than a column
pub fn summarize(values: &[f64]) -> AggregateResult {
    if values.is_empty() {
        return AggregateResult::default();
    }

    let count = values.len();
    let mean = mean(values);

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

    AggregateResult {
        count,
        mean,
        median,
        min: sorted[0],
        max: sorted[count - 1],
        std_dev: variance.sqrt(),
    }
}

/// Mean of a column, 0 when nothing is usable
pub fn average<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> f64 {
    mean(&usable_values(rows, field))
}

/// Maximum of a column, 0 when nothing is usable
pub fn max_value<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> f64 {
    usable_values(rows, field)
        .into_iter()
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Sum of a column's usable values
pub fn sum<R: Borrow<MatchRecord>>(rows: &[R], field: &str) -> f64 {
    usable_values(rows, field).iter().sum()
}

/// Find the row holding a column's maximum
///
/// **Public** - drives "best match" highlights
///
/// # Returns
/// The row and its value; the earliest row wins ties. `None` when no row
/// has a usable value.
pub fn max_lookup<'a, R: Borrow<MatchRecord>>(
    rows: &'a [R],
    field: &str,
) -> Option<(&'a MatchRecord, f64)> {
    rows.iter()
        .filter_map(|r| {
            let record = r.borrow();
            record.number(field).map(|v| (record, v))
        })
        .fold(None, |best, (record, v)| match best {
            Some((_, best_v)) if best_v >= v => best,
            _ => Some((record, v)),
        })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<MatchRecord> {
        values
            .iter()
            .map(|v| MatchRecord::from_raw([("Distance", *v)]))
            .collect()
    }

    #[test]
    fn test_aggregate_basic() {
        let result = aggregate(&rows(&["2", "4", "4", "4", "5", "5", "7", "9"]), "Distance");

        assert_eq!(result.count, 8);
        assert_eq!(result.mean, 5.0);
        assert_eq!(result.median, 4.5);
        assert_eq!(result.min, 2.0);
        assert_eq!(result.max, 9.0);
        assert_eq!(result.std_dev, 2.0);
    }

    #[test]
    fn test_aggregate_odd_median() {
        let result = aggregate(&rows(&["9", "1", "5"]), "Distance");
        assert_eq!(result.median, 5.0);
    }

    #[test]
    fn test_aggregate_skips_unusable() {
        let result = aggregate(&rows(&["10", "null", "NaN", "", "abc", "20"]), "Distance");
        assert_eq!(result.count, 2);
        assert_eq!(result.mean, 15.0);
    }

    #[test]
    fn test_aggregate_empty_is_zeroed() {
        let empty: Vec<MatchRecord> = vec![];
        assert_eq!(aggregate(&empty, "Distance"), AggregateResult::default());
        assert_eq!(aggregate(&rows(&["null", "NaN"]), "Distance"), AggregateResult::default());
        assert!(aggregate(&empty, "Distance").is_empty());
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let result = aggregate(&rows(&["42"]), "Distance");
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.median, 42.0);
    }

    #[test]
    fn test_outliers_pass_through() {
        let result = aggregate(&rows(&["1", "1000000"]), "Distance");
        assert_eq!(result.max, 1000000.0);
    }

    #[test]
    fn test_max_lookup_first_wins_ties() {
        let data = vec![
            MatchRecord::from_raw([("Match", "a"), ("Distance", "5")]),
            MatchRecord::from_raw([("Match", "b"), ("Distance", "9")]),
            MatchRecord::from_raw([("Match", "c"), ("Distance", "9")]),
        ];

        let (record, value) = max_lookup(&data, "Distance").unwrap();
        assert_eq!(record.match_name().as_deref(), Some("b"));
        assert_eq!(value, 9.0);
    }

    #[test]
    fn test_max_lookup_none_when_unusable() {
        assert!(max_lookup(&rows(&["null"]), "Distance").is_none());
    }

    #[test]
    fn test_borrowed_rows() {
        let owned = rows(&["1", "3"]);
        let borrowed: Vec<&MatchRecord> = owned.iter().collect();
        assert_eq!(average(&borrowed, "Distance"), 2.0);
        assert_eq!(max_value(&borrowed, "Distance"), 3.0);
        assert_eq!(sum(&borrowed, "Distance"), 4.0);
    }
}
