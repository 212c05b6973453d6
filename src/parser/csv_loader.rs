//! CSV ingestion for match exports.
//!
//! The header row defines the field names, blank lines are skipped, each
//! cell is type-inferred, and the resulting rows are ordered by match date.

use super::schema::{MatchCollection, MatchRecord};
use super::value::CellValue;
use crate::utils::error::LoadError;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse CSV text into a chronologically ordered collection
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `text` - Full CSV document, header row first
///
/// # Returns
/// The parsed collection, sorted ascending by `Date`
///
/// # Errors
/// * `LoadError::CsvError` - Malformed CSV (e.g. invalid UTF-8 inside a record)
/// * `LoadError::MissingHeader` - Empty document or blank header row
/// * `LoadError::NoRows` - Header present but no non-blank data rows
pub fn parse_csv(text: &str) -> Result<MatchCollection, LoadError> {
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::MissingHeader);
    }

    debug!("CSV header has {} columns", headers.len());

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let row = result?;

        if row.len() > headers.len() {
            debug!(
                "Row {} has {} cells but header has {}; extra cells ignored",
                line + 1,
                row.len(),
                headers.len()
            );
        }

        let fields: HashMap<String, CellValue> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(i, name)| {
                let cell = row.get(i).map(CellValue::infer).unwrap_or(CellValue::Missing);
                (name.clone(), cell)
            })
            .collect();

        let record = MatchRecord::new(fields);
        if record.is_blank() {
            continue;
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::NoRows);
    }

    sort_chronologically(&mut records);

    info!("Parsed {} match rows", records.len());
    Ok(MatchCollection::new(headers, records))
}

/// Read and parse a CSV file from disk
///
/// **Public** - used by the CLI and the session loader
///
/// # Errors
/// * `LoadError::NotCsv` - Path does not carry a `.csv` extension
/// * `LoadError::ReadFailed` - File missing or not valid UTF-8 text
/// * Any error from [`parse_csv`]
pub fn load_csv_file(path: impl AsRef<Path>) -> Result<MatchCollection, LoadError> {
    let path = path.as_ref();

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(LoadError::NotCsv(path.display().to_string()));
    }

    info!("Loading match export: {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_csv(&text)
}

/// Sort rows ascending by date
///
/// **Public** - exposed so callers assembling records by hand get the same order
///
/// Rows whose date cannot be parsed stay in their original slots; rows with
/// a parseable date are stably sorted among the remaining slots.
pub fn sort_chronologically(records: &mut [MatchRecord]) {
    let dated: Vec<(usize, NaiveDate)> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.date().map(|d| (i, d)))
        .collect();

    let undated = records.len() - dated.len();
    if undated > 0 {
        warn!("{} rows have no parseable date and keep their file order", undated);
    }

    let slots: Vec<usize> = dated.iter().map(|(i, _)| *i).collect();
    let mut ordered = dated;
    ordered.sort_by_key(|(_, date)| *date);

    let sorted_rows: Vec<MatchRecord> = ordered.iter().map(|(i, _)| records[*i].clone()).collect();
    for (slot, row) in slots.into_iter().zip(sorted_rows) {
        records[slot] = row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let text = "Match,Date,Distance,Minutes\nA v B,2024-02-01,10000,90\nC v D,2024-01-01,8000,NaN\n";
        let collection = parse_csv(text).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.records()[0].match_name().as_deref(), Some("C v D"));
        assert_eq!(collection.records()[1].number("Distance"), Some(10000.0));
        assert_eq!(collection.records()[0].number("Minutes"), None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "Distance,Minutes\n\n10000,90\n,\n8000,80\n";
        let collection = parse_csv(text).unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_short_rows_get_missing_cells() {
        let text = "Distance,Minutes,Position Group\n10000\n";
        let collection = parse_csv(text).unwrap();
        let row = &collection.records()[0];
        assert_eq!(row.get("Minutes"), Some(&CellValue::Missing));
        assert_eq!(row.number("Distance"), Some(10000.0));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(parse_csv(""), Err(LoadError::MissingHeader)));
        assert!(matches!(parse_csv("Distance,Minutes\n"), Err(LoadError::NoRows)));
    }

    #[test]
    fn test_bom_is_stripped() {
        let text = "\u{feff}Distance\n5\n";
        let collection = parse_csv(text).unwrap();
        assert!(collection.has_column("Distance"));
    }

    #[test]
    fn test_undated_rows_keep_their_slot() {
        let mut records = vec![
            MatchRecord::from_raw([("Match", "late"), ("Date", "2024-03-01")]),
            MatchRecord::from_raw([("Match", "undated"), ("Date", "TBC")]),
            MatchRecord::from_raw([("Match", "early"), ("Date", "01/01/2024")]),
        ];

        sort_chronologically(&mut records);

        let names: Vec<String> = records.iter().filter_map(|r| r.match_name()).collect();
        assert_eq!(names, vec!["early", "undated", "late"]);
    }

    #[test]
    fn test_equal_dates_are_stable() {
        let mut records = vec![
            MatchRecord::from_raw([("Match", "first"), ("Date", "2024-01-01")]),
            MatchRecord::from_raw([("Match", "second"), ("Date", "01/01/2024")]),
        ];

        sort_chronologically(&mut records);

        assert_eq!(records[0].match_name().as_deref(), Some("first"));
    }

    #[test]
    fn test_load_rejects_non_csv_extension() {
        let result = load_csv_file("export.xlsx");
        assert!(matches!(result, Err(LoadError::NotCsv(_))));
    }
}
