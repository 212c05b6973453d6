//! Position-vs-position comparison of per-90 figures.

use super::delta::Delta;
use crate::aggregator::position::PositionAverages;
use crate::catalog::per_ninety_metrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Two-position head-to-head for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub baseline_position: String,
    pub comparison_position: String,
    pub delta: Delta,
}

/// Cross-position view of one per-90 metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionComparison {
    pub metric: String,
    pub title: String,

    /// Per-90 value for every position
    pub values: BTreeMap<String, f64>,

    /// Position with the highest per-90 value; earliest label wins ties
    pub leader: String,
    pub leader_value: f64,

    /// Present only when exactly two positions exist
    pub head_to_head: Option<HeadToHead>,
}

/// Compare per-90 figures across positions
///
/// **Public** - main entry point for the position comparison view
///
/// # Arguments
/// * `by_position` - Output of `averages_by_position`
///
/// # Returns
/// One entry per per-90 metric; empty when fewer than two positions exist
pub fn compare_positions(by_position: &BTreeMap<String, PositionAverages>) -> Vec<PositionComparison> {
    if by_position.len() < 2 {
        return Vec::new();
    }

    per_ninety_metrics()
        .map(|metric| {
            let values: BTreeMap<String, f64> = by_position
                .iter()
                .map(|(position, averages)| {
                    let value = averages
                        .metrics
                        .get(metric.key)
                        .and_then(|m| m.per_ninety)
                        .unwrap_or(0.0);
                    (position.clone(), value)
                })
                .collect();

            let (leader, leader_value) = values
                .iter()
                .fold(None::<(&String, f64)>, |best, (position, &value)| match best {
                    Some((_, best_value)) if best_value >= value => best,
                    _ => Some((position, value)),
                })
                .map(|(p, v)| (p.clone(), v))
                .unwrap_or_default();

            let head_to_head = if values.len() == 2 {
                let mut pair = values.iter();
                match (pair.next(), pair.next()) {
                    (Some((a, &va)), Some((b, &vb))) => Some(HeadToHead {
                        baseline_position: a.clone(),
                        comparison_position: b.clone(),
                        delta: Delta::new(va, vb),
                    }),
                    _ => None,
                }
            } else {
                None
            };

            PositionComparison {
                metric: metric.key.to_string(),
                title: metric.title.to_string(),
                values,
                leader,
                leader_value,
                head_to_head,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::position::averages_by_position;
    use crate::parser::schema::MatchRecord;

    fn row(position: &str, distance: &str) -> MatchRecord {
        MatchRecord::from_raw([("Position Group", position), ("Distance", distance), ("Minutes", "90")])
    }

    #[test]
    fn test_two_positions() {
        let rows = vec![row("CM", "10000"), row("RW", "11000")];
        let comparisons = compare_positions(&averages_by_position(&rows));
        let distance = comparisons.iter().find(|c| c.metric == "distance").unwrap();

        assert_eq!(distance.leader, "RW");
        assert_eq!(distance.leader_value, 11000.0);
        let h2h = distance.head_to_head.as_ref().unwrap();
        assert_eq!(h2h.baseline_position, "CM");
        assert_eq!(h2h.comparison_position, "RW");
        assert!((h2h.delta.percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_positions_no_head_to_head() {
        let rows = vec![row("CM", "1"), row("RW", "2"), row("ST", "3")];
        let comparisons = compare_positions(&averages_by_position(&rows));

        assert!(comparisons.iter().all(|c| c.head_to_head.is_none()));
        assert_eq!(comparisons[0].values.len(), 3);
    }

    #[test]
    fn test_single_position_is_empty() {
        let rows = vec![row("CM", "1")];
        assert!(compare_positions(&averages_by_position(&rows)).is_empty());
    }
}
