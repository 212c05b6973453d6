use match_physicals::parser::{
    first_match, is_usable, load_csv_file, parse_csv, parse_date, sanitize_str, CellValue,
};
use match_physicals::utils::LoadError;
use chrono::NaiveDate;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

#[test]
fn test_sanitizer_rules() {
    assert_eq!(sanitize_str("12.5"), Some(12.5));
    assert_eq!(sanitize_str(" 7 "), Some(7.0));
    assert_eq!(sanitize_str("null"), None);
    assert_eq!(sanitize_str("NaN"), None);
    assert_eq!(sanitize_str(""), None);
    assert_eq!(sanitize_str("fast"), None);

    assert!(is_usable(Some(&CellValue::Number(0.0))));
    assert!(!is_usable(Some(&CellValue::Missing)));
    assert!(!is_usable(None));
}

#[test]
fn test_date_strategies() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 15);

    assert_eq!(parse_date("2024-01-15"), expected);
    assert_eq!(parse_date("2024-01-15T19:45:00Z"), expected);
    assert_eq!(parse_date("15/01/2024"), expected);
    assert_eq!(parse_date("15 Jan 2024"), expected);
    assert_eq!(parse_date("Jan 15, 2024"), expected);
    assert_eq!(parse_date("next tuesday"), None);
}

#[test]
fn test_first_match_short_circuits() {
    fn never(_: &str) -> Option<u32> {
        None
    }
    fn len(s: &str) -> Option<u32> {
        Some(s.len() as u32)
    }
    fn panics(_: &str) -> Option<u32> {
        panic!("should not be reached")
    }

    let parsers: [fn(&str) -> Option<u32>; 3] = [never, len, panics];
    assert_eq!(first_match(&parsers, "abc"), Some(3));
}

#[test]
fn test_rows_sorted_by_date_with_undated_rows_kept_in_place() {
    let csv = "Match,Date,Distance\n\
               late,2024-03-01,1\n\
               unknown,TBC,2\n\
               early,2024-01-01,3\n";
    let collection = parse_csv(csv).unwrap();
    let names: Vec<String> = collection
        .iter()
        .map(|r| r.match_name().unwrap_or_default())
        .collect();

    assert_eq!(names, vec!["early", "unknown", "late"]);
}

#[test]
fn test_short_rows_and_blank_lines() {
    let csv = "Match,Distance,Minutes\nA v B,10000\n\n,,\nC v D,9000,90\n";
    let collection = parse_csv(csv).unwrap();

    assert_eq!(collection.len(), 2);
    assert!(collection.has_column("Minutes"));
    assert!(!collection.has_column("minutes"));
    assert_eq!(collection.records()[0].number("Minutes"), None);
}

#[test]
fn test_empty_documents() {
    assert!(matches!(parse_csv(""), Err(LoadError::MissingHeader)));
    assert!(matches!(parse_csv("Distance,Minutes\n"), Err(LoadError::NoRows)));
}

#[test]
fn test_load_csv_file() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Distance,Minutes").unwrap();
    writeln!(file, "10000,90").unwrap();

    let collection = load_csv_file(file.path()).unwrap();
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_load_rejects_non_csv_extension() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Distance\n1").unwrap();

    assert!(matches!(load_csv_file(file.path()), Err(LoadError::NotCsv(_))));
}

#[test]
fn test_load_missing_file() {
    let result = load_csv_file("/definitely/not/here.csv");
    assert!(matches!(result, Err(LoadError::ReadFailed(_))));
}
