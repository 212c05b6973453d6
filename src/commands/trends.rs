//! Trend and match-ranking commands.

use super::distribution::resolve_metric;
use super::models::TrendArgs;
use super::utils::{open_session, selected_rows, validate_data_args};
use crate::aggregator::{average, rank_matches, trend_series};
use crate::output::{format_with_commas, render_matches};
use anyhow::{bail, Result};

/// Validate trend arguments
pub fn validate_trend_args(args: &TrendArgs) -> Result<()> {
    validate_data_args(&args.data)?;
    resolve_metric(&args.metric)?;

    if args.limit == Some(0) {
        bail!("Limit must be at least 1");
    }

    Ok(())
}

/// Execute the trends command
///
/// **Public** - main entry point called from main.rs
///
/// With a limit, only the most recent matches are shown.
pub fn execute_trends(args: TrendArgs) -> Result<()> {
    validate_trend_args(&args)?;
    let metric = resolve_metric(&args.metric)?;

    let session = open_session(&args.data)?;
    let rows = selected_rows(&session)?;

    let series = trend_series(&rows, metric.field);
    let shown = match args.limit {
        Some(n) if n < series.len() => &series[series.len() - n..],
        _ => &series[..],
    };

    println!("{}", render_matches(&format!("{} by match", metric.title), shown, metric.unit));
    println!("Average {}", format_with_commas(average(&rows, metric.field)));
    Ok(())
}

/// Execute the matches command (matches ranked by a metric)
pub fn execute_matches(args: TrendArgs) -> Result<()> {
    validate_trend_args(&args)?;
    let metric = resolve_metric(&args.metric)?;

    let session = open_session(&args.data)?;
    let rows = selected_rows(&session)?;

    let mut ranked = rank_matches(&rows, metric.field);
    if let Some(n) = args.limit {
        ranked.truncate(n);
    }

    println!("{}", render_matches(&format!("Top matches: {}", metric.title), &ranked, metric.unit));
    Ok(())
}
