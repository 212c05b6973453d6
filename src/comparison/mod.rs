//! Comparison views: half-over-half, possession phases and positions.
//!
//! All deltas go through [`percent_delta`] with an explicit baseline.

pub mod delta;
pub mod halves;
pub mod positions;
pub mod possession;

pub use delta::{is_comparable, percent_delta, Delta};
pub use halves::{compare_all_halves, compare_halves, HalvesComparison};
pub use positions::{compare_positions, HeadToHead, PositionComparison};
pub use possession::{compare_all_possession, compare_possession, PossessionComparison};
