//! Static metric descriptors.
//!
//! Every tracked metric names its source columns once here. Split columns
//! follow the export's suffix convention: ` 1` / ` 2` for halves,
//! ` TIP` / ` OTIP` for possession and ` P90` for precomputed per-90 values.

use serde::Serialize;

/// Histogram bucketing for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Binning {
    /// Width of every bin
    pub bin_width: f64,

    /// Upper bound of the last regular bin; larger values are clamped into it
    pub ceiling: f64,
}

impl Binning {
    pub const fn new(bin_width: f64, ceiling: f64) -> Self {
        Self { bin_width, ceiling }
    }
}

/// Read-only description of one derived metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDescriptor {
    /// Stable key used on the command line and in reports
    pub key: &'static str,

    /// Human-readable title
    pub title: &'static str,

    /// Whole-match column
    pub field: &'static str,

    pub first_half_field: Option<&'static str>,
    pub second_half_field: Option<&'static str>,
    pub tip_field: Option<&'static str>,
    pub otip_field: Option<&'static str>,

    /// Precomputed per-90 column, when the export provides one
    pub p90_field: Option<&'static str>,

    /// Display unit ("" for counts)
    pub unit: &'static str,

    /// Default histogram bucketing
    pub binning: Binning,
}

impl MetricDescriptor {
    /// True when the export splits this metric by half
    pub fn has_halves(&self) -> bool {
        self.first_half_field.is_some() && self.second_half_field.is_some()
    }

    /// True when the export splits this metric by possession phase
    pub fn has_possession_split(&self) -> bool {
        self.tip_field.is_some() && self.otip_field.is_some()
    }
}

/// How a possession metric turns into a comparable rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionBasis {
    /// Columns already hold a per-minute rate; average them
    Precomputed,

    /// Columns hold raw totals; divide by the phase's minutes
    PerMinute,
}

/// Read-only description of one in/out-of-possession comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PossessionMetric {
    pub key: &'static str,
    pub title: &'static str,
    pub tip_field: &'static str,
    pub otip_field: &'static str,
    pub unit: &'static str,
    pub basis: PossessionBasis,
}

/// All metrics tracked by the dashboard, in display order
pub const METRICS: &[MetricDescriptor] = &[
    MetricDescriptor {
        key: "distance",
        title: "Total Distance",
        field: "Distance",
        first_half_field: Some("Distance 1"),
        second_half_field: Some("Distance 2"),
        tip_field: Some("Distance TIP"),
        otip_field: Some("Distance OTIP"),
        p90_field: Some("Distance P90"),
        unit: "m",
        binning: Binning::new(500.0, 12000.0),
    },
    MetricDescriptor {
        key: "hsr_distance",
        title: "HSR Distance",
        field: "HSR Distance",
        first_half_field: Some("HSR Distance 1"),
        second_half_field: Some("HSR Distance 2"),
        tip_field: Some("HSR Distance TIP"),
        otip_field: Some("HSR Distance OTIP"),
        p90_field: Some("HSR Distance P90"),
        unit: "m",
        binning: Binning::new(50.0, 1000.0),
    },
    MetricDescriptor {
        key: "sprint_distance",
        title: "Sprint Distance",
        field: "Sprint Distance",
        first_half_field: Some("Sprint Distance 1"),
        second_half_field: Some("Sprint Distance 2"),
        tip_field: Some("Sprint Distance TIP"),
        otip_field: Some("Sprint Distance OTIP"),
        p90_field: Some("Sprint Distance P90"),
        unit: "m",
        binning: Binning::new(25.0, 400.0),
    },
    MetricDescriptor {
        key: "hi_count",
        title: "High Intensity Count",
        field: "HI Count",
        first_half_field: Some("HI Count 1"),
        second_half_field: Some("HI Count 2"),
        tip_field: Some("HI Count TIP"),
        otip_field: Some("HI Count OTIP"),
        p90_field: Some("HI Count P90"),
        unit: "",
        binning: Binning::new(5.0, 100.0),
    },
    MetricDescriptor {
        key: "high_accel",
        title: "High Acceleration Count",
        field: "High Acceleration Count",
        first_half_field: Some("High Acceleration Count 1"),
        second_half_field: Some("High Acceleration Count 2"),
        tip_field: Some("High Acceleration Count TIP"),
        otip_field: Some("High Acceleration Count OTIP"),
        p90_field: Some("High Acceleration Count P90"),
        unit: "",
        binning: Binning::new(1.0, 20.0),
    },
    MetricDescriptor {
        key: "medium_accel",
        title: "Medium Acceleration Count",
        field: "Medium Acceleration Count",
        first_half_field: Some("Medium Acceleration Count 1"),
        second_half_field: Some("Medium Acceleration Count 2"),
        tip_field: Some("Medium Acceleration Count TIP"),
        otip_field: Some("Medium Acceleration Count OTIP"),
        p90_field: Some("Medium Acceleration Count P90"),
        unit: "",
        binning: Binning::new(2.0, 40.0),
    },
    MetricDescriptor {
        key: "explosive_accel_hsr",
        title: "Explosive Acceleration to HSR Count",
        field: "Explosive Acceleration to HSR Count",
        first_half_field: Some("Explosive Acceleration to HSR Count 1"),
        second_half_field: Some("Explosive Acceleration to HSR Count 2"),
        tip_field: Some("Explosive Acceleration to HSR Count TIP"),
        otip_field: Some("Explosive Acceleration to HSR Count OTIP"),
        p90_field: Some("Explosive Acceleration to HSR Count P90"),
        unit: "",
        binning: Binning::new(1.0, 15.0),
    },
    MetricDescriptor {
        key: "explosive_accel_sprint",
        title: "Explosive Acceleration to Sprint Count",
        field: "Explosive Acceleration to Sprint Count",
        first_half_field: Some("Explosive Acceleration to Sprint Count 1"),
        second_half_field: Some("Explosive Acceleration to Sprint Count 2"),
        tip_field: Some("Explosive Acceleration to Sprint Count TIP"),
        otip_field: Some("Explosive Acceleration to Sprint Count OTIP"),
        p90_field: Some("Explosive Acceleration to Sprint Count P90"),
        unit: "",
        binning: Binning::new(1.0, 15.0),
    },
    MetricDescriptor {
        key: "high_decel",
        title: "High Deceleration Count",
        field: "High Deceleration Count",
        first_half_field: Some("High Deceleration Count 1"),
        second_half_field: Some("High Deceleration Count 2"),
        tip_field: Some("High Deceleration Count TIP"),
        otip_field: Some("High Deceleration Count OTIP"),
        p90_field: Some("High Deceleration Count P90"),
        unit: "",
        binning: Binning::new(2.0, 40.0),
    },
    MetricDescriptor {
        key: "medium_decel",
        title: "Medium Deceleration Count",
        field: "Medium Deceleration Count",
        first_half_field: Some("Medium Deceleration Count 1"),
        second_half_field: Some("Medium Deceleration Count 2"),
        tip_field: Some("Medium Deceleration Count TIP"),
        otip_field: Some("Medium Deceleration Count OTIP"),
        p90_field: Some("Medium Deceleration Count P90"),
        unit: "",
        binning: Binning::new(3.0, 60.0),
    },
    MetricDescriptor {
        key: "sprint_count",
        title: "Sprint Count",
        field: "Sprint Count",
        first_half_field: None,
        second_half_field: None,
        tip_field: None,
        otip_field: None,
        p90_field: Some("Sprint Count P90"),
        unit: "",
        binning: Binning::new(2.0, 50.0),
    },
    MetricDescriptor {
        key: "peak_speed",
        title: "Peak Speed",
        field: "PSV-99",
        first_half_field: None,
        second_half_field: None,
        tip_field: None,
        otip_field: None,
        p90_field: None,
        unit: "km/h",
        binning: Binning::new(1.0, 40.0),
    },
];

/// In/out-of-possession comparisons, in display order
pub const POSSESSION_METRICS: &[PossessionMetric] = &[
    PossessionMetric {
        key: "distance_per_min",
        title: "Distance/min",
        tip_field: "M/min TIP",
        otip_field: "M/min OTIP",
        unit: "m/min",
        basis: PossessionBasis::Precomputed,
    },
    PossessionMetric {
        key: "hsr_per_min",
        title: "HSR/min",
        tip_field: "HSR Distance TIP",
        otip_field: "HSR Distance OTIP",
        unit: "m/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "sprint_per_min",
        title: "Sprint/min",
        tip_field: "Sprint Distance TIP",
        otip_field: "Sprint Distance OTIP",
        unit: "m/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "hi_count_per_min",
        title: "HI Count/min",
        tip_field: "HI Count TIP",
        otip_field: "HI Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "high_accel_per_min",
        title: "High Accelerations/min",
        tip_field: "High Acceleration Count TIP",
        otip_field: "High Acceleration Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "medium_accel_per_min",
        title: "Medium Accelerations/min",
        tip_field: "Medium Acceleration Count TIP",
        otip_field: "Medium Acceleration Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "explosive_accel_hsr_per_min",
        title: "Explosive Accel to HSR/min",
        tip_field: "Explosive Acceleration to HSR Count TIP",
        otip_field: "Explosive Acceleration to HSR Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "explosive_accel_sprint_per_min",
        title: "Explosive Accel to Sprint/min",
        tip_field: "Explosive Acceleration to Sprint Count TIP",
        otip_field: "Explosive Acceleration to Sprint Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "high_decel_per_min",
        title: "High Decelerations/min",
        tip_field: "High Deceleration Count TIP",
        otip_field: "High Deceleration Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
    PossessionMetric {
        key: "medium_decel_per_min",
        title: "Medium Decelerations/min",
        tip_field: "Medium Deceleration Count TIP",
        otip_field: "Medium Deceleration Count OTIP",
        unit: "/min",
        basis: PossessionBasis::PerMinute,
    },
];

/// Look up a metric by key
pub fn find_metric(key: &str) -> Option<&'static MetricDescriptor> {
    METRICS.iter().find(|m| m.key == key)
}

/// Look up a possession comparison by key
pub fn find_possession_metric(key: &str) -> Option<&'static PossessionMetric> {
    POSSESSION_METRICS.iter().find(|m| m.key == key)
}

/// Metrics with a first/second-half split
pub fn halves_metrics() -> impl Iterator<Item = &'static MetricDescriptor> {
    METRICS.iter().filter(|m| m.has_halves())
}

/// Metrics with a per-90 figure (precomputed or derivable)
pub fn per_ninety_metrics() -> impl Iterator<Item = &'static MetricDescriptor> {
    METRICS.iter().filter(|m| m.p90_field.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = METRICS.iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), METRICS.len());

        let keys: HashSet<_> = POSSESSION_METRICS.iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), POSSESSION_METRICS.len());
    }

    #[test]
    fn test_split_fields_follow_suffix_convention() {
        for metric in halves_metrics() {
            assert_eq!(metric.first_half_field, Some(format!("{} 1", metric.field)).as_deref());
            assert_eq!(metric.second_half_field, Some(format!("{} 2", metric.field)).as_deref());
        }
    }

    #[test]
    fn test_default_binnings_are_positive() {
        for metric in METRICS {
            assert!(metric.binning.bin_width > 0.0, "{}", metric.key);
            assert!(metric.binning.ceiling > 0.0, "{}", metric.key);
        }
    }

    #[test]
    fn test_find_metric() {
        let sprint = find_metric("sprint_distance").unwrap();
        assert_eq!(sprint.field, "Sprint Distance");
        assert_eq!(sprint.binning, Binning::new(25.0, 400.0));
        assert!(find_metric("Sprint Distance").is_none());
    }

    #[test]
    fn test_peak_speed_has_no_splits() {
        let speed = find_metric("peak_speed").unwrap();
        assert!(!speed.has_halves());
        assert!(!speed.has_possession_split());
        assert!(speed.p90_field.is_none());
    }
}
