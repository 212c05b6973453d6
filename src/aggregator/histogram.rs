//! Fixed-width histograms for the distribution view.

use super::metrics::usable_values;
use crate::catalog::Binning;
use crate::parser::schema::MatchRecord;
use crate::utils::config::MAX_BINS;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// One histogram bucket covering `[lower_bound, upper_bound)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Axis label, e.g. `375-400`
    pub fn label(&self) -> String {
        format!("{}-{}", self.lower_bound, self.upper_bound)
    }
}

/// Number of bins a binning produces
///
/// `None` when the width or ceiling is not positive and finite, or when the
/// binning would need more than `MAX_BINS` bins. A ceiling narrower than one
/// bin still yields a single bin.
pub fn bin_count(bin_width: f64, ceiling: f64) -> Option<usize> {
    if !(bin_width.is_finite() && ceiling.is_finite() && bin_width > 0.0 && ceiling > 0.0) {
        return None;
    }

    let bins = (ceiling / bin_width).ceil();
    if !bins.is_finite() || bins > MAX_BINS as f64 {
        return None;
    }
    Some((bins as usize).max(1))
}

/// Bucket a column into fixed-width bins
///
/// **Public** - main entry point for distributions
///
/// # Arguments
/// * `rows` - Match rows
/// * `field` - Exact column name
/// * `bin_width` - Width of each bin
/// * `ceiling` - Upper edge of the regular range
///
/// # Returns
/// `ceil(ceiling / bin_width)` bins in ascending order, empty bins included.
/// Values at or above the ceiling land in the last bin and negative values
/// in the first, so counts always sum to the number of usable values.
/// Returns an empty vector when no value is usable or [`bin_count`] rejects
/// the binning.
pub fn histogram<R: Borrow<MatchRecord>>(
    rows: &[R],
    field: &str,
    bin_width: f64,
    ceiling: f64,
) -> Vec<HistogramBin> {
    let Some(num_bins) = bin_count(bin_width, ceiling) else {
        warn!(
            "Invalid binning for '{}': width {} ceiling {}",
            field, bin_width, ceiling
        );
        return Vec::new();
    };

    let values = usable_values(rows, field);
    if values.is_empty() {
        debug!("No usable values for '{}', histogram is empty", field);
        return Vec::new();
    }

    let mut counts = vec![0usize; num_bins];

    for v in values {
        let raw_index = (v / bin_width).floor();
        let index = if raw_index <= 0.0 {
            0
        } else {
            (raw_index as usize).min(num_bins - 1)
        };
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower_bound: i as f64 * bin_width,
            upper_bound: (i + 1) as f64 * bin_width,
            count,
        })
        .collect()
}

/// Bucket a column using a catalog or overridden binning
pub fn histogram_with<R: Borrow<MatchRecord>>(rows: &[R], field: &str, binning: Binning) -> Vec<HistogramBin> {
    histogram(rows, field, binning.bin_width, binning.ceiling)
}
