//! Histogram overrides loaded from TOML.
//!
//! The catalog's binning suits a typical senior outfield player. Squads
//! with different profiles can widen or narrow bins per metric:
//!
//! ```toml
//! [histogram.distance]
//! bin_width = 250
//! ceiling = 13000
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::descriptors::{find_metric, Binning, MetricDescriptor};
use crate::aggregator::histogram::bin_count;
use crate::utils::config::MAX_BINS;
use crate::utils::error::ConfigError;

/// Complete override configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Histogram overrides keyed by metric key
    #[serde(default)]
    pub histogram: HashMap<String, BinningOverride>,
}

/// Partial binning override; unset values keep the catalog default
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct BinningOverride {
    pub bin_width: Option<f64>,
    pub ceiling: Option<f64>,
}

impl DashboardConfig {
    /// Effective binning for a metric
    pub fn binning_for(&self, metric: &MetricDescriptor) -> Binning {
        let default = metric.binning;
        match self.histogram.get(metric.key) {
            Some(o) => Binning::new(
                o.bin_width.unwrap_or(default.bin_width),
                o.ceiling.unwrap_or(default.ceiling),
            ),
            None => default,
        }
    }
}

/// Load overrides from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::UnknownMetric` / `ConfigError::InvalidOverride` - see [`parse_config`]
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate overrides from TOML text
///
/// Every key must name a catalog metric, every value must be a positive,
/// finite number, and the effective binning may not exceed `MAX_BINS` bins.
pub fn parse_config(contents: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(contents)?;

    for (key, entry) in &config.histogram {
        let Some(metric) = find_metric(key) else {
            return Err(ConfigError::UnknownMetric(key.clone()));
        };

        for (name, value) in [("bin_width", entry.bin_width), ("ceiling", entry.ceiling)] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ConfigError::InvalidOverride {
                        metric: key.clone(),
                        reason: format!("{} must be a positive number, got {}", name, v),
                    });
                }
            }
        }

        let binning = config.binning_for(metric);
        if bin_count(binning.bin_width, binning.ceiling).is_none() {
            return Err(ConfigError::InvalidOverride {
                metric: key.clone(),
                reason: format!(
                    "bin_width {} and ceiling {} need more than {} bins",
                    binning.bin_width, binning.ceiling, MAX_BINS
                ),
            });
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = parse_config("[histogram.distance]\nbin_width = 250\n").unwrap();
        let distance = find_metric("distance").unwrap();

        assert_eq!(config.binning_for(distance), Binning::new(250.0, 12000.0));
    }

    #[test]
    fn test_untouched_metric_keeps_default() {
        let config = parse_config("[histogram.distance]\nceiling = 13000\n").unwrap();
        let hsr = find_metric("hsr_distance").unwrap();

        assert_eq!(config.binning_for(hsr), hsr.binning);
    }

    #[test]
    fn test_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.histogram.is_empty());
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let result = parse_config("[histogram.jumps]\nbin_width = 1\n");
        assert!(matches!(result, Err(ConfigError::UnknownMetric(_))));
    }

    #[test]
    fn test_too_many_bins_rejected() {
        let result = parse_config("[histogram.distance]\nbin_width = 1e-300\n");
        assert!(matches!(result, Err(ConfigError::InvalidOverride { .. })));

        let result = parse_config("[histogram.sprint_count]\nceiling = 1e9\n");
        assert!(matches!(result, Err(ConfigError::InvalidOverride { .. })));
    }

    #[test]
    fn test_non_positive_rejected() {
        let result = parse_config("[histogram.distance]\nbin_width = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidOverride { .. })));

        let result = parse_config("[histogram.distance]\nceiling = -5.0\n");
        assert!(matches!(result, Err(ConfigError::InvalidOverride { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_config("[histogram.distance\n");
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }
}
