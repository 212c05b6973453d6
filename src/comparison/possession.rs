//! In-possession vs out-of-possession comparison.

use super::delta::Delta;
use crate::aggregator::metrics::{average, max_value};
use crate::aggregator::per_ninety::per_minute;
use crate::catalog::{PossessionBasis, PossessionMetric, POSSESSION_METRICS};
use crate::parser::schema::MatchRecord;
use crate::utils::config::{OTIP_MINUTES_FIELD, TIP_MINUTES_FIELD};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// TIP/OTIP figures for one possession metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossessionComparison {
    pub metric: String,
    pub title: String,
    pub unit: String,
    pub tip: f64,
    pub otip: f64,

    /// Best single match in each phase
    pub tip_max: f64,
    pub otip_max: f64,

    /// Baseline is in possession
    pub delta: Delta,
}

fn phase_value<R: Borrow<MatchRecord>>(rows: &[R], field: &str, minutes_field: &str, basis: PossessionBasis) -> f64 {
    match basis {
        PossessionBasis::Precomputed => average(rows, field),
        PossessionBasis::PerMinute => per_minute(rows, field, minutes_field),
    }
}

fn phase_max<R: Borrow<MatchRecord>>(rows: &[R], field: &str, minutes_field: &str, basis: PossessionBasis) -> f64 {
    match basis {
        PossessionBasis::Precomputed => max_value(rows, field),
        PossessionBasis::PerMinute => rows
            .iter()
            .filter_map(|r| {
                let record = r.borrow();
                let value = record.number(field)?;
                let minutes = record.number(minutes_field)?;
                (minutes > 0.0).then(|| value / minutes)
            })
            .reduce(f64::max)
            .unwrap_or(0.0),
    }
}

/// Compare possession phases for one metric
///
/// **Public** - main entry point for the possession view
///
/// Rates are minutes-weighted over each phase's own minutes
/// (`Minutes TIP` / `Minutes OTIP`) unless the export already holds a rate.
pub fn compare_possession<R: Borrow<MatchRecord>>(
    rows: &[R],
    metric: &PossessionMetric,
) -> PossessionComparison {
    let tip = phase_value(rows, metric.tip_field, TIP_MINUTES_FIELD, metric.basis);
    let otip = phase_value(rows, metric.otip_field, OTIP_MINUTES_FIELD, metric.basis);

    PossessionComparison {
        metric: metric.key.to_string(),
        title: metric.title.to_string(),
        unit: metric.unit.to_string(),
        tip,
        otip,
        tip_max: phase_max(rows, metric.tip_field, TIP_MINUTES_FIELD, metric.basis),
        otip_max: phase_max(rows, metric.otip_field, OTIP_MINUTES_FIELD, metric.basis),
        delta: Delta::new(tip, otip),
    }
}

/// Compare possession phases for every catalog entry
pub fn compare_all_possession<R: Borrow<MatchRecord>>(rows: &[R]) -> Vec<PossessionComparison> {
    POSSESSION_METRICS
        .iter()
        .map(|metric| compare_possession(rows, metric))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_possession_metric;

    fn rows() -> Vec<MatchRecord> {
        vec![
            MatchRecord::from_raw([
                ("M/min TIP", "120"),
                ("M/min OTIP", "100"),
                ("HSR Distance TIP", "300"),
                ("HSR Distance OTIP", "200"),
                ("Minutes TIP", "40"),
                ("Minutes OTIP", "50"),
            ]),
            MatchRecord::from_raw([
                ("M/min TIP", "110"),
                ("M/min OTIP", "null"),
                ("HSR Distance TIP", "100"),
                ("HSR Distance OTIP", "100"),
                ("Minutes TIP", "40"),
                ("Minutes OTIP", "0"),
            ]),
        ]
    }

    #[test]
    fn test_precomputed_rate() {
        let result = compare_possession(&rows(), find_possession_metric("distance_per_min").unwrap());

        assert_eq!(result.tip, 115.0);
        assert_eq!(result.otip, 100.0);
        assert_eq!(result.tip_max, 120.0);
        assert!(result.delta.percent < 0.0);
    }

    #[test]
    fn test_per_minute_rate() {
        let result = compare_possession(&rows(), find_possession_metric("hsr_per_min").unwrap());

        // (300 + 100) / 80 in possession; the zero-minute OTIP row is skipped
        assert_eq!(result.tip, 5.0);
        assert_eq!(result.otip, 4.0);
        assert_eq!(result.tip_max, 7.5);
        assert_eq!(result.otip_max, 4.0);
        assert_eq!(result.delta.percent, -20.0);
    }

    #[test]
    fn test_no_data_is_not_comparable() {
        let empty: Vec<MatchRecord> = vec![];
        let all = compare_all_possession(&empty);

        assert_eq!(all.len(), POSSESSION_METRICS.len());
        assert!(all.iter().all(|c| !c.delta.comparable && c.tip_max == 0.0));
    }
}
