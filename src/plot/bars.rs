//! ASCII bar charts for terminal output.
//!
//! This is intentionally "dumb" (fixed-width rows, `#` bars), optimized for:
//! - quick visual comparison of buckets in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each bucket renders as a labelled group with one bar per outcome
//! category. Count charts share one global scale so bars are comparable
//! across buckets; percentage charts are always scaled against 100.

use crate::present::{ChartData, ValueUnit};

/// Render one chart as a multi-line string.
///
/// `width` is the bar area in characters; labels and values are appended
/// outside it.
pub fn render_bar_chart(chart: &ChartData, width: usize) -> String {
    let width = width.max(10);

    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", chart.title));

    if chart.labels.is_empty() {
        out.push_str("(no data)\n");
        return append_empty_note(out, chart);
    }

    let scale = match chart.unit {
        ValueUnit::Count => max_value(chart).max(1.0),
        ValueUnit::Percent => 100.0,
    };

    for (i, label) in chart.labels.iter().enumerate() {
        out.push_str(&format!("{label}\n"));
        for series in &chart.series {
            let value = series.values[i];
            let bar = "#".repeat(bar_len(value, scale, width));
            out.push_str(&format!(
                "  {:<9} |{:<w$} {}\n",
                series.outcome.label(),
                bar,
                format_value(value, chart.unit),
                w = width,
            ));
        }
    }

    append_empty_note(out, chart)
}

fn append_empty_note(mut out: String, chart: &ChartData) -> String {
    for label in &chart.empty {
        out.push_str(&format!("(no data: {label})\n"));
    }
    out
}

fn max_value(chart: &ChartData) -> f64 {
    chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0f64, f64::max)
}

fn bar_len(value: f64, scale: f64, width: usize) -> usize {
    // Round so a full-scale value fills the bar area exactly.
    ((value / scale) * width as f64).round() as usize
}

fn format_value(value: f64, unit: ValueUnit) -> String {
    match unit {
        ValueUnit::Count => format!("{}", value as u64),
        ValueUnit::Percent => format!("{value:.1}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutcomeCategory;
    use crate::present::OutcomeSeries;

    fn chart(unit: ValueUnit, labels: Vec<&str>, columns: Vec<[f64; 4]>) -> ChartData {
        let series = OutcomeCategory::ALL
            .iter()
            .map(|&outcome| OutcomeSeries {
                outcome,
                values: columns.iter().map(|c| c[outcome.index()]).collect(),
            })
            .collect();
        ChartData {
            title: "Test".to_string(),
            unit,
            labels: labels.into_iter().map(str::to_string).collect(),
            series,
            empty: Vec::new(),
        }
    }

    #[test]
    fn full_scale_count_fills_the_bar_area() {
        let c = chart(ValueUnit::Count, vec!["a"], vec![[10.0, 5.0, 0.0, 0.0]]);
        let rendered = render_bar_chart(&c, 10);
        assert!(rendered.contains("hit       |########## 10"));
        assert!(rendered.contains("hitout    |#####      5"));
        assert!(rendered.contains("walk      |           0"));
    }

    #[test]
    fn percent_bars_scale_against_one_hundred() {
        let c = chart(ValueUnit::Percent, vec!["a"], vec![[50.0, 50.0, 0.0, 0.0]]);
        let rendered = render_bar_chart(&c, 10);
        assert!(rendered.contains("hit       |#####      50.0%"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let c = chart(ValueUnit::Count, vec!["a", "b"], vec![[1.0, 2.0, 3.0, 4.0], [0.0, 0.0, 0.0, 4.0]]);
        assert_eq!(render_bar_chart(&c, 30), render_bar_chart(&c, 30));
    }

    #[test]
    fn empty_chart_says_so() {
        let mut c = chart(ValueUnit::Percent, vec![], vec![]);
        c.empty = vec!["fast, fast, fast".to_string()];
        let rendered = render_bar_chart(&c, 20);
        assert!(rendered.contains("(no data)\n"));
        assert!(rendered.contains("(no data: fast, fast, fast)"));
    }
}
