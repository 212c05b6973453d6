//! Match Physicals
//!
//! Aggregation engine for per-match athlete physical-performance
//! exports: column statistics, per-90 normalization, position groups,
//! histograms, half/possession comparisons and trends.
//!
//! This crate provides the core implementation for the
//! `match-physicals` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! match-physicals summary --csv player.csv
//! match-physicals distribution --csv player.csv --metric sprint_distance
//! match-physicals --help
//! ```

pub mod aggregator;
pub mod catalog;
pub mod chart;
pub mod commands;
pub mod comparison;
pub mod output;
pub mod parser;
pub mod report;
pub mod session;
pub mod utils;
