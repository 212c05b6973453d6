//! SVG chart output.

use crate::utils::error::OutputError;
use log::info;
use std::fs;
use std::path::Path;

/// Write a rendered chart to disk, creating parent directories
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path or an existing directory
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_svg(svg: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    super::validate_path(output_path)?;
    super::ensure_parent(output_path)?;
    fs::write(output_path, svg)?;

    info!("Chart written to {} ({} bytes)", output_path.display(), svg.len());
    Ok(())
}
