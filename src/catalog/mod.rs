//! Metric catalog and histogram overrides.
//!
//! The catalog is static: descriptors are defined once and never mutated.
//! Runtime configuration only produces new `Binning` values.

pub mod descriptors;
pub mod overrides;

pub use descriptors::{
    find_metric, find_possession_metric, halves_metrics, per_ninety_metrics, Binning,
    MetricDescriptor, PossessionBasis, PossessionMetric, METRICS, POSSESSION_METRICS,
};
pub use overrides::{load_config, parse_config, BinningOverride, DashboardConfig};
