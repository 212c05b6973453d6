//! CSV ingestion and the match data model.
//!
//! This module handles:
//! - Type-inferring raw cells and screening unusable values
//! - Parsing CSV text into match records
//! - Parsing match dates with an ordered strategy list
//! - Ordering the collection chronologically

pub mod csv_loader;
pub mod date;
pub mod schema;
pub mod value;

// Re-export main types
pub use csv_loader::{load_csv_file, parse_csv, sort_chronologically};
pub use date::{first_match, parse_date, DateStrategy, DATE_STRATEGIES};
pub use schema::{MatchCollection, MatchRecord};
pub use value::{is_usable, sanitize_str, to_number, CellValue};
