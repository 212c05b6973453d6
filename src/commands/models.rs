use std::path::PathBuf;

/// Input options shared by every data command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DataArgs {
    /// CSV export to load
    pub csv: PathBuf,

    /// Optional TOML file with histogram overrides
    pub config: Option<PathBuf>,

    /// Restrict to one position group (`None` or `all` for every match)
    pub position: Option<String>,
}

impl Default for DataArgs {
    fn default() -> Self {
        Self {
            csv: PathBuf::from("matches.csv"),
            config: None,
            position: None,
        }
    }
}

/// Arguments for the summary command
#[derive(Debug, Clone, Default)]
pub struct SummaryArgs {
    pub data: DataArgs,

    /// Write the JSON report here; it covers every match regardless of the position filter
    pub output_json: Option<PathBuf>,

    /// Print best-match highlights
    pub highlights: bool,
}

/// Arguments for the distribution command
#[derive(Debug, Clone)]
pub struct DistributionArgs {
    pub data: DataArgs,

    /// Catalog metric key
    pub metric: String,

    /// Override the bin width for this run
    pub bin_width: Option<f64>,

    /// Override the ceiling for this run
    pub ceiling: Option<f64>,

    /// Write an SVG chart here
    pub output_svg: Option<PathBuf>,

    /// Chart title (defaults to the metric title)
    pub title: Option<String>,
}

impl Default for DistributionArgs {
    fn default() -> Self {
        Self {
            data: DataArgs::default(),
            metric: "distance".to_string(),
            bin_width: None,
            ceiling: None,
            output_svg: None,
            title: None,
        }
    }
}

/// Arguments for the halves and possession commands
#[derive(Debug, Clone, Default)]
pub struct CompareArgs {
    pub data: DataArgs,

    /// Single metric key; every metric when `None`
    pub metric: Option<String>,
}

/// Arguments for the trends and matches commands
#[derive(Debug, Clone)]
pub struct TrendArgs {
    pub data: DataArgs,

    /// Catalog metric key
    pub metric: String,

    /// Show at most this many matches
    pub limit: Option<usize>,
}

impl Default for TrendArgs {
    fn default() -> Self {
        Self {
            data: DataArgs::default(),
            metric: "distance".to_string(),
            limit: None,
        }
    }
}
