//! Minutes-weighted rate normalization.
//!
//! Rates are computed from summed totals (Σvalue / Σminutes), never by
//! averaging per-match rates.

use super::metrics::usable_values;
use crate::parser::schema::MatchRecord;
use crate::utils::config::{MINUTES_FIELD, MINUTES_PER_MATCH};
use log::debug;
use std::borrow::Borrow;

/// Rate of `value_field` per `scale` minutes of `minutes_field`
///
/// **Public** - shared core of per-90 and per-minute figures
///
/// Only rows where both the value and the minutes are usable, and the
/// minutes are positive, contribute. Returns 0 when no minutes accumulate.
pub fn rate_per<R: Borrow<MatchRecord>>(
    rows: &[R],
    value_field: &str,
    minutes_field: &str,
    scale: f64,
) -> f64 {
    let (total_value, total_minutes) = rows
        .iter()
        .filter_map(|r| {
            let record = r.borrow();
            let value = record.number(value_field)?;
            let minutes = record.number(minutes_field)?;
            (minutes > 0.0).then_some((value, minutes))
        })
        .fold((0.0, 0.0), |(tv, tm), (v, m)| (tv + v, tm + m));

    if total_minutes > 0.0 {
        (total_value / total_minutes) * scale
    } else {
        0.0
    }
}

/// Minutes-weighted per-90 rate
///
/// **Public** - main entry point for per-90 normalization
///
/// # Arguments
/// * `rows` - Match rows
/// * `value_field` - Cumulative per-match count or distance
/// * `minutes_field` - Minutes played column (usually `Minutes`)
pub fn per_ninety<R: Borrow<MatchRecord>>(rows: &[R], value_field: &str, minutes_field: &str) -> f64 {
    rate_per(rows, value_field, minutes_field, MINUTES_PER_MATCH)
}

/// Minutes-weighted per-minute rate
pub fn per_minute<R: Borrow<MatchRecord>>(rows: &[R], value_field: &str, minutes_field: &str) -> f64 {
    rate_per(rows, value_field, minutes_field, 1.0)
}

/// Per-90 figure following the precomputed-first policy
///
/// **Public** - used by the position bundle for every tracked metric
///
/// If the precomputed P90 column has at least one usable value in `rows`,
/// its average is returned, including a genuine 0. Otherwise the rate is
/// derived from `value_field` and `Minutes`.
pub fn preferred_per_ninety<R: Borrow<MatchRecord>>(
    rows: &[R],
    p90_field: Option<&str>,
    value_field: &str,
) -> f64 {
    if let Some(p90_field) = p90_field {
        let precomputed = usable_values(rows, p90_field);
        if !precomputed.is_empty() {
            return precomputed.iter().sum::<f64>() / precomputed.len() as f64;
        }
        debug!("No usable '{}' values, deriving from '{}'", p90_field, value_field);
    }

    per_ninety(rows, value_field, MINUTES_FIELD)
}
