//! Cell values and the value sanitizer.
//!
//! Tracking exports are messy: cells go missing, hold the literal strings
//! `null` or `NaN`, or carry free text in numeric columns. Every consumer of
//! match data goes through [`to_number`] before doing arithmetic, so a bad
//! cell is screened once and never turns into a NaN downstream.

use crate::utils::config::INVALID_LITERALS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single type-inferred CSV cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty or absent cell
    Missing,

    /// Finite number
    Number(f64),

    /// Anything that did not parse as a finite number
    Text(String),
}

impl CellValue {
    /// Infer the type of a raw cell
    ///
    /// **Public** - used by the CSV loader for every cell
    ///
    /// Blank cells become `Missing`, finite numbers become `Number` and
    /// everything else (including `null`, `NaN` and `inf`) is kept as `Text`.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }

        match sanitize_str(trimmed) {
            Some(number) => CellValue::Number(number),
            None => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Text view of the cell, for categorical columns
    ///
    /// Numbers are rendered back without a trailing `.0` so a position group
    /// exported as `10` reads as `10`.
    pub fn as_label(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parse raw text into a usable number
///
/// **Public** - the single screening point for raw strings
///
/// # Returns
/// `Some(n)` only for finite numbers; `None` for blanks, the invalid
/// literals and anything that does not parse.
pub fn sanitize_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || INVALID_LITERALS.contains(&trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Extract a usable number from a cell
///
/// **Public** - called by every aggregation before any arithmetic
///
/// # Arguments
/// * `value` - The cell, or `None` when the column is absent from the row
pub fn to_number(value: Option<&CellValue>) -> Option<f64> {
    match value? {
        CellValue::Number(n) if n.is_finite() => Some(*n),
        CellValue::Number(_) | CellValue::Missing => None,
        CellValue::Text(s) => sanitize_str(s),
    }
}

/// Check whether a cell holds a usable number
pub fn is_usable(value: Option<&CellValue>) -> bool {
    to_number(value).is_some()
}
