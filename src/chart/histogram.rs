//! SVG bar chart for histogram bins.
//!
//! Hand-written SVG keeps the dependency tree small and the output stable
//! enough to assert on in tests.

use crate::aggregator::histogram::HistogramBin;
use log::info;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,

    /// Bar fill colour
    pub color: String,

    /// Unit appended to the x-axis caption
    pub unit: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Distribution".to_string(),
            width: 900,
            height: 400,
            color: "#3b82f6".to_string(),
            unit: String::new(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;

/// Render histogram bins as an SVG bar chart
///
/// **Public** - main entry point for chart output
///
/// # Arguments
/// * `bins` - Output of `histogram`, in ascending order
/// * `config` - Chart options (defaults used if `None`)
///
/// # Returns
/// Complete SVG document. An empty bin list yields a chart with a
/// "No data" caption rather than an error.
pub fn render_histogram_svg(bins: &[HistogramBin], config: Option<&ChartConfig>) -> String {
    let config = config.cloned().unwrap_or_default();
    info!("Rendering histogram chart with {} bins", bins.len());

    let width = config.width as f64;
    let height = config.height as f64;
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let baseline = MARGIN_TOP + plot_height;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(r#"<style>.bar:hover { opacity: 0.8; } text { font: 11px sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<text x="{}" y="22" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape_xml(&config.title)
    ));

    // Axes
    svg.push_str(&format!(
        r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/><line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_width,
        t = MARGIN_TOP,
        b = baseline
    ));

    if bins.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle">No data</text>"#,
            MARGIN_LEFT + plot_width / 2.0,
            MARGIN_TOP + plot_height / 2.0
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
    let slot = plot_width / bins.len() as f64;
    let bar_width = (slot - 2.0).max(1.0);

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="end">{}</text>"#,
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 4.0,
        peak
    ));

    for (i, bin) in bins.iter().enumerate() {
        let bar_height = bin.count as f64 / peak * plot_height;
        let x = MARGIN_LEFT + i as f64 * slot + 1.0;
        let y = baseline - bar_height;
        let label = bin.label();

        svg.push_str(&format!(
            r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {}</title></rect>"#,
            x,
            y,
            bar_width,
            bar_height,
            escape_xml(&config.color),
            label,
            bin.count
        ));

        let label_x = x + bar_width / 2.0;
        let label_y = baseline + 12.0;
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" transform="rotate(-45 {:.2} {:.2})">{}</text>"#,
            label_x, label_y, label_x, label_y, label
        ));
    }

    let caption = if config.unit.is_empty() {
        "Value".to_string()
    } else {
        format!("Value ({})", escape_xml(&config.unit))
    };
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        height - 8.0,
        caption
    ));

    svg.push_str("</svg>");

    info!("Histogram chart rendered ({} bytes)", svg.len());
    svg
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins() -> Vec<HistogramBin> {
        vec![
            HistogramBin { lower_bound: 0.0, upper_bound: 25.0, count: 4 },
            HistogramBin { lower_bound: 25.0, upper_bound: 50.0, count: 0 },
            HistogramBin { lower_bound: 50.0, upper_bound: 75.0, count: 2 },
        ]
    }

    #[test]
    fn test_one_bar_per_bin() {
        let svg = render_histogram_svg(&bins(), None);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("0-25: 4"));
        assert!(svg.contains("50-75: 2"));
    }

    #[test]
    fn test_title_is_escaped() {
        let config = ChartConfig::new().with_title("HSR <m> & more").with_unit("m");
        let svg = render_histogram_svg(&bins(), Some(&config));

        assert!(svg.contains("HSR &lt;m&gt; &amp; more"));
        assert!(svg.contains("Value (m)"));
    }

    #[test]
    fn test_empty_bins() {
        let svg = render_histogram_svg(&[], None);
        assert!(svg.contains("No data"));
        assert_eq!(svg.matches("<rect").count(), 0);
    }
}
