//! Relative change between a baseline and a comparison value.

use serde::{Deserialize, Serialize};

/// Percent change from `baseline` to `comparison`
///
/// **Public** - the single delta formula used by every comparison view
///
/// # Returns
/// `((comparison - baseline) / baseline) × 100` when the baseline is
/// positive, otherwise 0. Not symmetric: swapping the arguments changes
/// both sign and magnitude.
pub fn percent_delta(baseline: f64, comparison: f64) -> f64 {
    if is_comparable(baseline) {
        ((comparison - baseline) / baseline) * 100.0
    } else {
        // No meaningful percentage against a zero or negative baseline
        0.0
    }
}

/// True when a percent delta against `baseline` means something
pub fn is_comparable(baseline: f64) -> bool {
    baseline.is_finite() && baseline > 0.0
}

/// A baseline/comparison pair with its percent change
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub baseline: f64,
    pub comparison: f64,
    pub percent: f64,

    /// False when the baseline is not positive; render as `N/A`
    pub comparable: bool,
}

impl Delta {
    pub fn new(baseline: f64, comparison: f64) -> Self {
        Self {
            baseline,
            comparison,
            percent: percent_delta(baseline, comparison),
            comparable: is_comparable(baseline),
        }
    }

    /// Absolute change, `comparison - baseline`
    pub fn absolute(&self) -> f64 {
        self.comparison - self.baseline
    }
}
