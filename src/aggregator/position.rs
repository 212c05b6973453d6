//! Position grouping and per-position averages.

use super::metrics::{aggregate, average, max_value, sum, AggregateResult};
use super::per_ninety::preferred_per_ninety;
use crate::catalog::METRICS;
use crate::parser::schema::MatchRecord;
use crate::utils::config::{
    MINUTES_FIELD, OTIP_DISTANCE_PER_MIN_FIELD, OTIP_MINUTES_FIELD, PEAK_SPEED_FIELD,
    TIP_DISTANCE_PER_MIN_FIELD, TIP_MINUTES_FIELD,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Which rows a view should include
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionFilter {
    #[default]
    All,
    Only(String),
}

impl PositionFilter {
    /// Build a filter from an optional label; `all` (any case) or `None` means no filter
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") => PositionFilter::All,
            Some(l) if l.eq_ignore_ascii_case("all") => PositionFilter::All,
            Some(l) => PositionFilter::Only(l.to_string()),
        }
    }

    pub fn matches(&self, record: &MatchRecord) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(position) => record.position() == *position,
        }
    }
}

/// Averages for one metric within one position group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAverages {
    /// Statistics of the whole-match column
    pub total: AggregateResult,

    /// Per-90 figure; `None` for metrics without a per-90 notion (peak speed)
    pub per_ninety: Option<f64>,

    pub first_half: Option<f64>,
    pub second_half: Option<f64>,
}

/// Everything the position view shows for one group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionAverages {
    pub matches: usize,
    pub minutes: f64,
    pub tip_minutes: f64,
    pub otip_minutes: f64,

    /// Highest `PSV-99` in the group
    pub peak_speed: f64,

    pub tip_distance_per_min: f64,
    pub otip_distance_per_min: f64,

    /// Keyed by catalog metric key
    pub metrics: BTreeMap<String, MetricAverages>,
}

/// Partition rows by `Position Group`
///
/// **Public** - main entry point for the position view
///
/// Blank or missing positions share the `Unknown` group. Every row lands in
/// exactly one group and rows keep their input order within a group.
pub fn group_by_position<R: Borrow<MatchRecord>>(rows: &[R]) -> BTreeMap<String, Vec<&MatchRecord>> {
    let mut groups: BTreeMap<String, Vec<&MatchRecord>> = BTreeMap::new();
    for row in rows {
        let record = row.borrow();
        groups.entry(record.position()).or_default().push(record);
    }
    debug!("Grouped {} rows into {} positions", rows.len(), groups.len());
    groups
}

/// Number of distinct position groups
pub fn position_count<R: Borrow<MatchRecord>>(rows: &[R]) -> usize {
    group_by_position(rows).len()
}

/// True when the data supports a position-vs-position comparison
pub fn has_position_comparison<R: Borrow<MatchRecord>>(rows: &[R]) -> bool {
    position_count(rows) > 1
}

/// Keep only the rows a filter selects
pub fn filter_by_position<'a, R: Borrow<MatchRecord>>(
    rows: &'a [R],
    filter: &PositionFilter,
) -> Vec<&'a MatchRecord> {
    rows.iter()
        .map(|r| r.borrow())
        .filter(|r| filter.matches(r))
        .collect()
}

/// Averages for one set of rows
///
/// # Arguments
/// * `rows` - Rows of a single position group (any set works)
pub fn position_averages<R: Borrow<MatchRecord>>(rows: &[R]) -> PositionAverages {
    let metrics = METRICS
        .iter()
        .map(|metric| {
            let averages = MetricAverages {
                total: aggregate(rows, metric.field),
                per_ninety: metric
                    .p90_field
                    .map(|p90| preferred_per_ninety(rows, Some(p90), metric.field)),
                first_half: metric.first_half_field.map(|f| average(rows, f)),
                second_half: metric.second_half_field.map(|f| average(rows, f)),
            };
            (metric.key.to_string(), averages)
        })
        .collect();

    PositionAverages {
        matches: rows.len(),
        minutes: sum(rows, MINUTES_FIELD),
        tip_minutes: sum(rows, TIP_MINUTES_FIELD),
        otip_minutes: sum(rows, OTIP_MINUTES_FIELD),
        peak_speed: max_value(rows, PEAK_SPEED_FIELD),
        tip_distance_per_min: average(rows, TIP_DISTANCE_PER_MIN_FIELD),
        otip_distance_per_min: average(rows, OTIP_DISTANCE_PER_MIN_FIELD),
        metrics,
    }
}

/// `PositionAverages` for every group
pub fn averages_by_position<R: Borrow<MatchRecord>>(rows: &[R]) -> BTreeMap<String, PositionAverages> {
    group_by_position(rows)
        .into_iter()
        .map(|(position, group)| (position, position_averages(&group)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(position: &str, distance: &str, minutes: &str) -> MatchRecord {
        MatchRecord::from_raw([
            ("Position Group", position),
            ("Distance", distance),
            ("Minutes", minutes),
        ])
    }

    #[test]
    fn test_group_sizes() {
        let rows = vec![row("CM", "1", "90"), row("CM", "2", "90"), row("RW", "3", "90")];
        let groups = group_by_position(&rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["CM"].len(), 2);
        assert_eq!(groups["RW"].len(), 1);
        assert!(has_position_comparison(&rows));
    }

    #[test]
    fn test_blank_position_is_unknown() {
        let rows = vec![row("", "1", "90"), MatchRecord::from_raw([("Distance", "2")])];
        let groups = group_by_position(&rows);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Unknown"].len(), 2);
        assert!(!has_position_comparison(&rows));
    }

    #[test]
    fn test_filter_by_position() {
        let rows = vec![row("CM", "1", "90"), row("RW", "2", "90")];

        assert_eq!(filter_by_position(&rows, &PositionFilter::All).len(), 2);
        let only = filter_by_position(&rows, &PositionFilter::Only("RW".into()));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].number("Distance"), Some(2.0));
        assert!(filter_by_position(&rows, &PositionFilter::Only("GK".into())).is_empty());
    }

    #[test]
    fn test_filter_from_label() {
        assert_eq!(PositionFilter::from_label(None), PositionFilter::All);
        assert_eq!(PositionFilter::from_label(Some("ALL")), PositionFilter::All);
        assert_eq!(
            PositionFilter::from_label(Some(" CM ")),
            PositionFilter::Only("CM".into())
        );
    }

    #[test]
    fn test_position_averages() {
        let rows = vec![
            MatchRecord::from_raw([
                ("Distance", "10000"),
                ("Distance 1", "5200"),
                ("Distance 2", "4800"),
                ("Minutes", "90"),
                ("PSV-99", "30"),
            ]),
            MatchRecord::from_raw([
                ("Distance", "4000"),
                ("Distance 1", "4000"),
                ("Distance 2", "null"),
                ("Minutes", "45"),
                ("PSV-99", "32"),
            ]),
        ];
        let averages = position_averages(&rows);

        assert_eq!(averages.matches, 2);
        assert_eq!(averages.minutes, 135.0);
        assert_eq!(averages.peak_speed, 32.0);

        let distance = &averages.metrics["distance"];
        assert_eq!(distance.total.mean, 7000.0);
        assert_eq!(distance.first_half, Some(4600.0));
        assert_eq!(distance.second_half, Some(4800.0));
        let p90 = distance.per_ninety.unwrap();
        assert!((p90 - 14000.0 / 135.0 * 90.0).abs() < 1e-9);

        assert_eq!(averages.metrics["peak_speed"].per_ninety, None);
    }

    #[test]
    fn test_averages_by_position_keys() {
        let rows = vec![row("CM", "1", "90"), row("RW", "2", "90"), row("", "3", "90")];
        let by_position = averages_by_position(&rows);

        let keys: Vec<&str> = by_position.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["CM", "RW", "Unknown"]);
        assert_eq!(by_position["RW"].metrics["distance"].total.mean, 2.0);
    }
}
