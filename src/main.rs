//! Match Physicals CLI
//!
//! Loads a per-match physical-performance CSV for one athlete and prints
//! averages, distributions and comparisons.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use match_physicals::commands::{
    display_metrics, display_version, execute_distribution, execute_halves, execute_matches,
    execute_positions, execute_possession, execute_summary, execute_trends, validate_report_file,
    CompareArgs, DataArgs, DistributionArgs, SummaryArgs, TrendArgs,
};

/// Match Physicals - per-match physical performance analysis
#[derive(Parser, Debug)]
#[command(name = "match-physicals")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every command that reads a CSV
#[derive(Args, Debug)]
struct DataOpts {
    /// CSV export to analyse
    #[arg(short, long, env = "MATCH_PHYSICALS_CSV")]
    csv: PathBuf,

    /// TOML file with histogram overrides
    #[arg(long, env = "MATCH_PHYSICALS_CONFIG")]
    config: Option<PathBuf>,

    /// Only include matches played in this position group
    #[arg(short, long)]
    position: Option<String>,
}

impl From<DataOpts> for DataArgs {
    fn from(opts: DataOpts) -> Self {
        Self {
            csv: opts.csv,
            config: opts.config,
            position: opts.position,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Averages for every metric, optionally exported as JSON
    Summary {
        #[command(flatten)]
        data: DataOpts,

        /// Output path for the JSON report (always covers every match)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print best-match highlights
        #[arg(long)]
        highlights: bool,
    },

    /// Per-position averages and per-90 leaders
    Positions {
        #[command(flatten)]
        data: DataOpts,
    },

    /// Histogram of one metric
    Distribution {
        #[command(flatten)]
        data: DataOpts,

        /// Metric key (see `metrics`)
        #[arg(short, long, default_value = "distance")]
        metric: String,

        /// Bin width override
        #[arg(long)]
        bin_width: Option<f64>,

        /// Ceiling override
        #[arg(long)]
        ceiling: Option<f64>,

        /// Output path for an SVG chart
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,
    },

    /// First half vs second half
    Halves {
        #[command(flatten)]
        data: DataOpts,

        /// Single metric key
        #[arg(short, long)]
        metric: Option<String>,
    },

    /// In possession vs out of possession
    Possession {
        #[command(flatten)]
        data: DataOpts,

        /// Single possession metric key
        #[arg(short, long)]
        metric: Option<String>,
    },

    /// One metric match by match, in date order
    Trends {
        #[command(flatten)]
        data: DataOpts,

        #[arg(short, long, default_value = "distance")]
        metric: String,

        /// Only the most recent N matches
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Matches ranked by one metric
    Matches {
        #[command(flatten)]
        data: DataOpts,

        #[arg(short, long, default_value = "distance")]
        metric: String,

        /// Only the top N matches
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List metric keys
    Metrics,

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Summary {
            data,
            output,
            highlights,
        } => execute_summary(SummaryArgs {
            data: data.into(),
            output_json: output,
            highlights,
        })?,

        Commands::Positions { data } => execute_positions(data.into())?,

        Commands::Distribution {
            data,
            metric,
            bin_width,
            ceiling,
            svg,
            title,
        } => execute_distribution(DistributionArgs {
            data: data.into(),
            metric,
            bin_width,
            ceiling,
            output_svg: svg,
            title,
        })?,

        Commands::Halves { data, metric } => execute_halves(CompareArgs {
            data: data.into(),
            metric,
        })?,

        Commands::Possession { data, metric } => execute_possession(CompareArgs {
            data: data.into(),
            metric,
        })?,

        Commands::Trends {
            data,
            metric,
            limit,
        } => execute_trends(TrendArgs {
            data: data.into(),
            metric,
            limit,
        })?,

        Commands::Matches {
            data,
            metric,
            limit,
        } => execute_matches(TrendArgs {
            data: data.into(),
            metric,
            limit,
        })?,

        Commands::Metrics => display_metrics(),

        Commands::Validate { file } => validate_report_file(file)?,

        Commands::Version => display_version(),
    }

    Ok(())
}
