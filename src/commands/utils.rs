use crate::aggregator::position::{filter_by_position, PositionFilter};
use crate::catalog::{load_config, DashboardConfig, METRICS, POSSESSION_METRICS};
use crate::output::read_report;
use crate::parser::schema::MatchRecord;
use crate::session::Session;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::models::DataArgs;

/// Check the shared input options before touching the file system
pub fn validate_data_args(args: &DataArgs) -> Result<()> {
    if args.csv.as_os_str().is_empty() {
        bail!("CSV path cannot be empty");
    }

    let is_csv = args
        .csv
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        bail!("Input must be a .csv file: {}", args.csv.display());
    }

    if let Some(position) = &args.position {
        if position.trim().is_empty() {
            bail!("Position filter cannot be blank");
        }
    }

    Ok(())
}

/// Load the CSV into a fresh session and apply the position filter
pub fn open_session(args: &DataArgs) -> Result<Session> {
    let mut session = Session::new();
    session
        .load_csv_file(&args.csv)
        .with_context(|| format!("Failed to load {}", args.csv.display()))?;

    let filter = PositionFilter::from_label(args.position.as_deref());
    debug!("Position filter: {:?}", filter);
    session.set_position_filter(filter);

    Ok(session)
}

/// Load histogram overrides, or the catalog defaults without a file
pub fn load_overrides(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => {
            info!("Loading overrides from {}", path.display());
            load_config(path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(DashboardConfig::default()),
    }
}

/// Rows of the active dataset that pass the session's position filter
pub fn selected_rows(session: &Session) -> Result<Vec<&MatchRecord>> {
    let dataset = session.dataset().context("No dataset loaded")?;
    let rows = filter_by_position(dataset.records(), &session.selection().position);

    if rows.is_empty() {
        if let PositionFilter::Only(position) = &session.selection().position {
            bail!("No matches for position '{}'", position);
        }
    }

    Ok(rows)
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Matches: {}", report.match_count);
    println!("  Minutes: {}", report.total_minutes);
    println!("  Positions: {}", report.positions.join(", "));
    println!("  Highlights: {}", report.highlights.len());

    Ok(())
}

/// List every metric the catalog knows
pub fn display_metrics() {
    println!("Tracked metrics:");
    for m in METRICS {
        println!(
            "  {:<24} {:<40} bins {} up to {}{}",
            m.key,
            m.title,
            m.binning.bin_width,
            m.binning.ceiling,
            if m.has_halves() { "  [halves]" } else { "" }
        );
    }

    println!();
    println!("Possession metrics:");
    for m in POSSESSION_METRICS {
        println!("  {:<32} {} ({})", m.key, m.title, m.unit);
    }
}

/// Display version information
pub fn display_version() {
    println!("Match Physicals v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-match physical performance analysis for a single athlete.");
}
