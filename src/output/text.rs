//! Number formatting and terminal rendering.
//!
//! Plain formatting helpers never colour their output; the `render_*`
//! functions add colour and symbols for the terminal.

use crate::aggregator::histogram::HistogramBin;
use crate::aggregator::metrics::AggregateResult;
use crate::aggregator::position::PositionAverages;
use crate::aggregator::trends::{Highlight, TrendPoint};
use crate::comparison::{Delta, HalvesComparison, PositionComparison, PossessionComparison};
use crate::parser::date::parse_date;
use crate::utils::config::NOT_AVAILABLE;
use colored::*;
use std::collections::BTreeMap;

const RULE: &str = "---------------------------------------------------\n";
const BAR_WIDTH: usize = 40;

/// Format a number for display
///
/// One decimal at or above 10, two decimals below; `N/A` for NaN or infinity.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// `format_number` with thousands separators, e.g. `10,234.5`
pub fn format_with_commas(value: f64) -> String {
    let formatted = format_number(value);
    if !value.is_finite() {
        return formatted;
    }

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a raw date cell as `15 Jan 2024`
///
/// Unrecognised dates are shown as exported; blank or missing ones as `N/A`.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => NOT_AVAILABLE.to_string(),
        Some(text) => match parse_date(text) {
            Some(date) => date.format("%-d %b %Y").to_string(),
            None => text.to_string(),
        },
    }
}

/// Signed percentage, or `N/A` when the baseline is not comparable
pub fn format_delta(delta: &Delta) -> String {
    if delta.comparable {
        format!("{:+.1}%", delta.percent)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn with_unit(value: String, unit: &str) -> String {
    if unit.is_empty() {
        value
    } else {
        format!("{} {}", value, unit)
    }
}

fn delta_symbol(delta: &Delta) -> &'static str {
    if !delta.comparable || delta.percent == 0.0 {
        "➡️"
    } else if delta.percent > 0.0 {
        "📈"
    } else {
        "📉"
    }
}

fn colored_delta(delta: &Delta) -> ColoredString {
    let text = format_delta(delta);
    if !delta.comparable || delta.percent == 0.0 {
        text.normal()
    } else if delta.percent > 0.0 {
        text.green()
    } else {
        text.red()
    }
}

fn header(title: &str) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&title.bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out
}

/// Render column statistics as a table
///
/// # Arguments
/// * `title` - Heading, usually the source file name
/// * `rows` - `(label, unit, statistics)` per metric
pub fn render_summary(title: &str, rows: &[(String, String, AggregateResult)]) -> String {
    let mut out = header(title);
    out.push_str(&format!(
        "{:<40} {:>6} {:>12} {:>12} {:>12} {:>12}\n",
        "Metric", "n", "Mean", "Median", "Max", "Std Dev"
    ));

    for (label, unit, stats) in rows {
        let name = if unit.is_empty() {
            label.clone()
        } else {
            format!("{} ({})", label, unit)
        };
        out.push_str(&format!(
            "{:<40} {:>6} {:>12} {:>12} {:>12} {:>12}\n",
            name,
            stats.count,
            format_with_commas(stats.mean),
            format_with_commas(stats.median),
            format_with_commas(stats.max),
            format_number(stats.std_dev)
        ));
    }
    out
}

/// Render highlights with the average's share of the best match
pub fn render_highlights(highlights: &[Highlight]) -> String {
    let mut out = header("Highlights");
    for h in highlights {
        out.push_str(&format!(
            "🏆 {}: {} in {} (avg {}, {}% of max)\n",
            h.title.bold(),
            with_unit(format_with_commas(h.value), &h.unit),
            h.best_match,
            format_with_commas(h.average),
            format_number(h.percent_of_max)
        ));
    }
    out
}

fn push_averages(out: &mut String, label: &str, averages: &PositionAverages) {
    out.push_str(&format!(
        "{} - {} matches, {} min, peak speed {} km/h\n",
        label.bold(),
        averages.matches,
        format_with_commas(averages.minutes),
        format_number(averages.peak_speed)
    ));
    for (key, metric) in &averages.metrics {
        if let Some(p90) = metric.per_ninety {
            out.push_str(&format!(
                "  {:<28} avg {:>10}  p90 {:>10}\n",
                key,
                format_with_commas(metric.total.mean),
                format_with_commas(p90)
            ));
        }
    }
}

/// Render the whole-selection bundle: per-90 figures and peak speed
pub fn render_overall(label: &str, averages: &PositionAverages) -> String {
    let mut out = header("Per 90");
    push_averages(&mut out, label, averages);
    out
}

/// Render per-position averages and the cross-position comparison
pub fn render_positions(
    by_position: &BTreeMap<String, PositionAverages>,
    comparisons: &[PositionComparison],
) -> String {
    let mut out = header("Position Summary");
    for (position, averages) in by_position {
        push_averages(&mut out, position, averages);
    }

    if !comparisons.is_empty() {
        out.push_str("\nLeaders (per 90):\n");
        for c in comparisons {
            let h2h = c
                .head_to_head
                .as_ref()
                .map(|h| {
                    format!(
                        "  {} vs {}: {}",
                        h.baseline_position,
                        h.comparison_position,
                        colored_delta(&h.delta)
                    )
                })
                .unwrap_or_default();
            out.push_str(&format!(
                "  {:<40} {} ({}){}\n",
                c.title,
                c.leader,
                format_with_commas(c.leader_value),
                h2h
            ));
        }
    }
    out
}

/// Render first-half vs second-half comparisons
pub fn render_halves(comparisons: &[HalvesComparison]) -> String {
    let mut out = header("First Half vs Second Half");
    for c in comparisons {
        out.push_str(&format!(
            "{} {}: {} -> {} ({})\n",
            delta_symbol(&c.delta),
            c.title,
            with_unit(format_with_commas(c.first_half_avg), &c.unit),
            with_unit(format_with_commas(c.second_half_avg), &c.unit),
            colored_delta(&c.delta)
        ));
        out.push_str(&format!(
            "     max {} / {}\n",
            format_with_commas(c.first_half_max),
            format_with_commas(c.second_half_max)
        ));
    }
    out
}

/// Render in-possession vs out-of-possession comparisons
pub fn render_possession(comparisons: &[PossessionComparison]) -> String {
    let mut out = header("In Possession vs Out of Possession");
    for c in comparisons {
        out.push_str(&format!(
            "{} {}: TIP {} -> OTIP {} ({})\n",
            delta_symbol(&c.delta),
            c.title,
            with_unit(format_number(c.tip), &c.unit),
            with_unit(format_number(c.otip), &c.unit),
            colored_delta(&c.delta)
        ));
        out.push_str(&format!(
            "     max {} / {}\n",
            format_number(c.tip_max),
            format_number(c.otip_max)
        ));
    }
    out
}

/// Render a histogram as horizontal text bars
pub fn render_histogram(title: &str, bins: &[HistogramBin]) -> String {
    let mut out = header(title);
    if bins.is_empty() {
        out.push_str("No usable values\n");
        return out;
    }

    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bin in bins {
        let width = bin.count * BAR_WIDTH / peak;
        out.push_str(&format!(
            "{:>15} | {} {}\n",
            bin.label(),
            "█".repeat(width).cyan(),
            bin.count
        ));
    }
    out
}

/// Render a per-match list (trend series or ranking)
pub fn render_matches(title: &str, points: &[TrendPoint], unit: &str) -> String {
    let mut out = header(title);
    for p in points {
        let value = p
            .value
            .map(|v| with_unit(format_with_commas(v), unit))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        out.push_str(&format!(
            "{:>4}. {:<32} {:<12} {:<8} {}\n",
            p.index,
            p.match_name,
            format_date(p.date.as_deref()),
            p.position,
            value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.345), "12.3");
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(9.876), "9.88");
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(f64::NAN), "N/A");
        assert_eq!(format_number(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(10234.56), "10,234.6");
        assert_eq!(format_with_commas(1234567.0), "1,234,567.0");
        assert_eq!(format_with_commas(999.0), "999.0");
        assert_eq!(format_with_commas(-1500.0), "-1,500.00");
        assert_eq!(format_with_commas(5.5), "5.50");
        assert_eq!(format_with_commas(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-01-15")), "15 Jan 2024");
        assert_eq!(format_date(Some("05/03/2024")), "5 Mar 2024");
        assert_eq!(format_date(Some("Matchday 3")), "Matchday 3");
        assert_eq!(format_date(Some("  ")), "N/A");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(&Delta::new(100.0, 150.0)), "+50.0%");
        assert_eq!(format_delta(&Delta::new(100.0, 50.0)), "-50.0%");
        assert_eq!(format_delta(&Delta::new(0.0, 50.0)), "N/A");
    }

    #[test]
    fn test_render_overall_lists_per_ninety_and_peak_speed() {
        let mut averages = PositionAverages {
            matches: 2,
            minutes: 180.0,
            peak_speed: 33.2,
            ..Default::default()
        };
        averages.metrics.insert(
            "distance".to_string(),
            crate::aggregator::position::MetricAverages {
                per_ninety: Some(10250.0),
                ..Default::default()
            },
        );
        averages.metrics.insert("peak_speed".to_string(), Default::default());

        let text = render_overall("All matches", &averages);
        assert!(text.contains("peak speed 33.2 km/h"));
        assert!(text.contains("distance"));
        assert!(text.contains("10,250.0"));
        assert!(!text.contains("peak_speed"));
    }

    #[test]
    fn test_render_histogram_labels() {
        let bins = vec![
            HistogramBin { lower_bound: 0.0, upper_bound: 25.0, count: 2 },
            HistogramBin { lower_bound: 25.0, upper_bound: 50.0, count: 0 },
        ];
        let text = render_histogram("Sprint Distance", &bins);

        assert!(text.contains("0-25"));
        assert!(text.contains("25-50"));
        assert!(render_histogram("Empty", &[]).contains("No usable values"));
    }
}
