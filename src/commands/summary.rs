//! Summary and position commands.
//!
//! The summary command:
//! 1. Loads the CSV into a session
//! 2. Aggregates every catalog metric (memoized)
//! 3. Prints the table, the per-90 bundle and, optionally, highlights
//! 4. Writes the JSON report if requested
//!
//! `--position` narrows the terminal views only; the JSON report always
//! covers every match in the file.

use super::models::{DataArgs, SummaryArgs};
use super::utils::{open_session, selected_rows, validate_data_args};
use crate::aggregator::{averages_by_position, highlights, position_averages, PositionFilter};
use crate::catalog::METRICS;
use crate::comparison::compare_positions;
use crate::output::{
    render_highlights, render_overall, render_positions, render_summary, write_report,
};
use crate::report::build_report;
use anyhow::{Context, Result};
use colored::*;
use log::{info, warn};
use std::time::Instant;

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * CSV load failures
/// * Report write failures
pub fn execute_summary(args: SummaryArgs) -> Result<()> {
    let start_time = Instant::now();
    validate_data_args(&args.data)?;

    let mut session = open_session(&args.data)?;
    let filter = session.selection().position.clone();

    let (dataset, cache) = session.analysis().context("No dataset loaded")?;
    let table: Vec<_> = METRICS
        .iter()
        .map(|m| {
            (
                m.title.to_string(),
                m.unit.to_string(),
                cache.aggregate(dataset, m.field, &filter),
            )
        })
        .collect();

    println!("{}", render_summary(dataset.source(), &table));

    if let Some(path) = &args.output_json {
        if let PositionFilter::Only(position) = &filter {
            warn!(
                "Report covers every match; the '{}' filter applies to the tables only",
                position
            );
        }
        let report = build_report(dataset, dataset.source());
        write_report(&report, path).context("Failed to write JSON report")?;
        println!("📄 Report written to {}", path.display().to_string().cyan());
    }

    let rows = selected_rows(&session)?;
    let label = match &filter {
        PositionFilter::All => "All matches",
        PositionFilter::Only(position) => position.as_str(),
    };
    println!("{}", render_overall(label, &position_averages(&rows)));

    if args.highlights {
        println!("{}", render_highlights(&highlights(&rows)));
    }

    info!("Summary completed in {:.2?}", start_time.elapsed());
    Ok(())
}

/// Execute the positions command
pub fn execute_positions(args: DataArgs) -> Result<()> {
    validate_data_args(&args)?;

    let session = open_session(&args)?;
    let rows = selected_rows(&session)?;

    let by_position = averages_by_position(&rows);
    let comparisons = compare_positions(&by_position);
    if comparisons.is_empty() {
        info!("Only one position group present, skipping comparison");
    }

    println!("{}", render_positions(&by_position, &comparisons));
    Ok(())
}
