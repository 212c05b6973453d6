//! Memoization of derived values.
//!
//! Entries are keyed by dataset identity, so a reload can never serve
//! stale numbers even before the cache is cleared.

use super::dataset::{Dataset, DatasetId};
use crate::aggregator::histogram::{histogram_with, HistogramBin};
use crate::aggregator::metrics::{aggregate, AggregateResult};
use crate::aggregator::per_ninety::preferred_per_ninety;
use crate::aggregator::position::{filter_by_position, PositionFilter};
use crate::catalog::Binning;
use log::debug;
use std::collections::HashMap;

/// Which derivation a cache entry holds, with its parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Derivation {
    Aggregate,

    /// Bin width and ceiling as raw bits
    Histogram { bin_width: u64, ceiling: u64 },

    PerNinety { p90_field: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    dataset: DatasetId,
    field: String,
    filter: PositionFilter,
    derivation: Derivation,
}

#[derive(Debug, Clone)]
enum CachedValue {
    Aggregate(AggregateResult),
    Histogram(Vec<HistogramBin>),
    Scalar(f64),
}

/// Memoized engine results
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: HashMap<CacheKey, CachedValue>,
    hits: usize,
    misses: usize,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        debug!("Clearing analysis cache ({} entries)", self.entries.len());
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from memory
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute
    pub fn misses(&self) -> usize {
        self.misses
    }

    fn get_or_insert_with(&mut self, key: CacheKey, compute: impl FnOnce() -> CachedValue) -> CachedValue {
        if let Some(value) = self.entries.get(&key) {
            self.hits += 1;
            return value.clone();
        }
        self.misses += 1;
        let value = compute();
        self.entries.insert(key, value.clone());
        value
    }

    /// Memoized `aggregate` over the filtered rows
    pub fn aggregate(&mut self, dataset: &Dataset, field: &str, filter: &PositionFilter) -> AggregateResult {
        let key = CacheKey {
            dataset: dataset.id(),
            field: field.to_string(),
            filter: filter.clone(),
            derivation: Derivation::Aggregate,
        };
        let value = self.get_or_insert_with(key, || {
            let rows = filter_by_position(dataset.records(), filter);
            CachedValue::Aggregate(aggregate(&rows, field))
        });
        match value {
            CachedValue::Aggregate(result) => result,
            _ => AggregateResult::default(),
        }
    }

    /// Memoized `histogram` over the filtered rows
    pub fn histogram(
        &mut self,
        dataset: &Dataset,
        field: &str,
        binning: Binning,
        filter: &PositionFilter,
    ) -> Vec<HistogramBin> {
        let key = CacheKey {
            dataset: dataset.id(),
            field: field.to_string(),
            filter: filter.clone(),
            derivation: Derivation::Histogram {
                bin_width: binning.bin_width.to_bits(),
                ceiling: binning.ceiling.to_bits(),
            },
        };
        let value = self.get_or_insert_with(key, || {
            let rows = filter_by_position(dataset.records(), filter);
            CachedValue::Histogram(histogram_with(&rows, field, binning))
        });
        match value {
            CachedValue::Histogram(bins) => bins,
            _ => Vec::new(),
        }
    }

    /// Memoized `preferred_per_ninety` over the filtered rows
    pub fn per_ninety(
        &mut self,
        dataset: &Dataset,
        p90_field: Option<&str>,
        field: &str,
        filter: &PositionFilter,
    ) -> f64 {
        let key = CacheKey {
            dataset: dataset.id(),
            field: field.to_string(),
            filter: filter.clone(),
            derivation: Derivation::PerNinety {
                p90_field: p90_field.map(str::to_string),
            },
        };
        let value = self.get_or_insert_with(key, || {
            let rows = filter_by_position(dataset.records(), filter);
            CachedValue::Scalar(preferred_per_ninety(&rows, p90_field, field))
        });
        match value {
            CachedValue::Scalar(v) => v,
            _ => 0.0,
        }
    }
}
