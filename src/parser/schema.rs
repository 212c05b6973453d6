//! In-memory data model for a loaded match export.
//!
//! A `MatchRecord` is one CSV row keyed by exact header name. Records are
//! immutable once parsed: every derived value lives in a new structure.

use super::date::parse_date;
use super::value::{to_number, CellValue};
use crate::utils::config::{DATE_FIELD, MATCH_FIELD, POSITION_FIELD, UNKNOWN_POSITION};
use chrono::NaiveDate;
use std::collections::HashMap;

/// One row of the source table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRecord {
    fields: HashMap<String, CellValue>,
}

impl MatchRecord {
    /// Build a record from already-typed cells
    pub fn new(fields: HashMap<String, CellValue>) -> Self {
        Self { fields }
    }

    /// Build a record from raw `(header, cell)` pairs, inferring each cell's type
    ///
    /// **Public** - convenient for tests and for callers that already split a row
    pub fn from_raw<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), CellValue::infer(v.as_ref())))
            .collect();
        Self { fields }
    }

    /// Raw cell for a column, `None` if the column is absent from this row
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Sanitized numeric value for a column
    pub fn number(&self, field: &str) -> Option<f64> {
        to_number(self.get(field))
    }

    /// Trimmed, non-empty text for a categorical column
    pub fn label(&self, field: &str) -> Option<String> {
        self.get(field)
            .and_then(CellValue::as_label)
            .filter(|s| !s.trim().is_empty())
    }

    /// Match name (e.g. "Home v Away"), if provided
    pub fn match_name(&self) -> Option<String> {
        self.label(MATCH_FIELD)
    }

    /// Raw date text, if provided
    pub fn date_text(&self) -> Option<String> {
        self.label(DATE_FIELD)
    }

    /// Parsed match date, if any date strategy recognises it
    pub fn date(&self) -> Option<NaiveDate> {
        self.date_text().and_then(|text| parse_date(&text))
    }

    /// Position group, with blank or missing values folded into one group
    pub fn position(&self) -> String {
        self.label(POSITION_FIELD)
            .unwrap_or_else(|| UNKNOWN_POSITION.to_string())
    }

    /// Number of columns present on this row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every cell on the row is blank
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(CellValue::is_missing)
    }
}

/// Chronologically ordered match rows plus the header they were read with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchCollection {
    headers: Vec<String>,
    records: Vec<MatchRecord>,
}

impl MatchCollection {
    /// Wrap already-ordered records
    ///
    /// **Public** - the CSV loader sorts before calling this
    pub fn new(headers: Vec<String>, records: Vec<MatchRecord>) -> Self {
        Self { headers, records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check whether the export carries a column (exact, case-sensitive match)
    pub fn has_column(&self, field: &str) -> bool {
        self.headers.iter().any(|h| h == field)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a MatchCollection {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
