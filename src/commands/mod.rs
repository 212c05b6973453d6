//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod distribution;
pub mod models;
pub mod summary;
pub mod trends;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_halves, execute_possession};
pub use distribution::{execute_distribution, validate_distribution_args};
pub use models::{CompareArgs, DataArgs, DistributionArgs, SummaryArgs, TrendArgs};
pub use summary::{execute_positions, execute_summary};
pub use trends::{execute_matches, execute_trends, validate_trend_args};
pub use utils::{display_metrics, display_version, validate_data_args, validate_report_file};
