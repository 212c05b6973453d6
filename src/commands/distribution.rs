//! Distribution command implementation.

use super::models::DistributionArgs;
use super::utils::{load_overrides, open_session, validate_data_args};
use crate::aggregator::bin_count;
use crate::catalog::{find_metric, Binning, MetricDescriptor};
use crate::chart::{render_histogram_svg, ChartConfig};
use crate::output::{format_with_commas, render_histogram, write_svg};
use crate::utils::config::MAX_BINS;
use anyhow::{anyhow, bail, Context, Result};
use colored::*;
use log::{debug, info};

/// Validate distribution arguments
///
/// **Public** - can be called before execution to fail fast
pub fn validate_distribution_args(args: &DistributionArgs) -> Result<()> {
    validate_data_args(&args.data)?;
    let metric = resolve_metric(&args.metric)?;

    for (name, value) in [("bin width", args.bin_width), ("ceiling", args.ceiling)] {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                bail!("{} must be a positive number, got {}", name, v);
            }
        }
    }

    let binning = Binning::new(
        args.bin_width.unwrap_or(metric.binning.bin_width),
        args.ceiling.unwrap_or(metric.binning.ceiling),
    );
    check_bin_count(binning)
}

fn check_bin_count(binning: Binning) -> Result<()> {
    if bin_count(binning.bin_width, binning.ceiling).is_none() {
        bail!(
            "Bin width {} and ceiling {} need more than {} bins",
            binning.bin_width,
            binning.ceiling,
            MAX_BINS
        );
    }
    Ok(())
}

pub(crate) fn resolve_metric(key: &str) -> Result<&'static MetricDescriptor> {
    find_metric(key).ok_or_else(|| {
        anyhow!(
            "Unknown metric '{}'. Run `match-physicals metrics` to list metric keys",
            key
        )
    })
}

/// Execute the distribution command
///
/// **Public** - main entry point called from main.rs
///
/// Binning precedence: command-line flags, then the config file, then the
/// catalog default.
pub fn execute_distribution(args: DistributionArgs) -> Result<()> {
    validate_distribution_args(&args)?;
    let metric = resolve_metric(&args.metric)?;

    let config = load_overrides(args.data.config.as_deref())?;
    let configured = config.binning_for(metric);
    let binning = Binning::new(
        args.bin_width.unwrap_or(configured.bin_width),
        args.ceiling.unwrap_or(configured.ceiling),
    );
    check_bin_count(binning)?;
    debug!("Binning for {}: {:?}", metric.key, binning);

    let mut session = open_session(&args.data)?;
    session.set_metric(Some(metric.key.to_string()));
    let filter = session.selection().position.clone();

    let (dataset, cache) = session.analysis().context("No dataset loaded")?;
    let bins = cache.histogram(dataset, metric.field, binning, &filter);
    let stats = cache.aggregate(dataset, metric.field, &filter);

    println!("{}", render_histogram(metric.title, &bins));
    println!(
        "Average {} | Max {} | {} matches with data",
        format_with_commas(stats.mean),
        format_with_commas(stats.max),
        stats.count
    );

    if let Some(path) = &args.output_svg {
        let chart = ChartConfig::new()
            .with_title(args.title.clone().unwrap_or_else(|| metric.title.to_string()))
            .with_unit(metric.unit);
        let svg = render_histogram_svg(&bins, Some(&chart));
        write_svg(&svg, path).context("Failed to write SVG chart")?;
        println!("📈 Chart written to {}", path.display().to_string().cyan());
    }

    info!("Distribution of {} across {} bins", metric.key, bins.len());
    Ok(())
}
