//! SVG chart generation.

pub mod histogram;

pub use histogram::{render_histogram_svg, ChartConfig};
