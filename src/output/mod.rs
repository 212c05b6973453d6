//! Output writers and terminal formatting.
//!
//! This module handles writing derived data to disk and to the terminal:
//! - JSON reports
//! - SVG histograms
//! - Number/date formatting and text tables

pub mod json;
pub mod svg;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use svg::write_svg;
pub use text::{
    format_date, format_delta, format_number, format_with_commas, render_halves,
    render_highlights, render_histogram, render_matches, render_overall, render_positions,
    render_possession, render_summary,
};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories for an output file
pub(crate) fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
