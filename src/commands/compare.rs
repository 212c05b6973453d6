//! Halves and possession comparison commands.

use super::models::CompareArgs;
use super::utils::{open_session, selected_rows, validate_data_args};
use crate::catalog::{find_metric, find_possession_metric};
use crate::comparison::{compare_all_halves, compare_all_possession, compare_halves, compare_possession};
use crate::output::{render_halves, render_possession};
use anyhow::{anyhow, Result};

/// Execute the halves command
///
/// **Public** - main entry point called from main.rs
pub fn execute_halves(args: CompareArgs) -> Result<()> {
    validate_data_args(&args.data)?;
    let session = open_session(&args.data)?;
    let rows = selected_rows(&session)?;

    let comparisons = match &args.metric {
        Some(key) => {
            let metric = find_metric(key).ok_or_else(|| anyhow!("Unknown metric '{}'", key))?;
            let comparison = compare_halves(&rows, metric)
                .ok_or_else(|| anyhow!("Metric '{}' has no first/second half split", key))?;
            vec![comparison]
        }
        None => compare_all_halves(&rows),
    };

    println!("{}", render_halves(&comparisons));
    Ok(())
}

/// Execute the possession command
pub fn execute_possession(args: CompareArgs) -> Result<()> {
    validate_data_args(&args.data)?;
    let session = open_session(&args.data)?;
    let rows = selected_rows(&session)?;

    let comparisons = match &args.metric {
        Some(key) => {
            let metric = find_possession_metric(key)
                .ok_or_else(|| anyhow!("Unknown possession metric '{}'", key))?;
            vec![compare_possession(&rows, metric)]
        }
        None => compare_all_possession(&rows),
    };

    println!("{}", render_possession(&comparisons));
    Ok(())
}
