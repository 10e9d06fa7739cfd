//! Presentation adapter: aggregates → chart-ready series.
//!
//! Pure reshaping. This module never touches counts or ratios beyond copying
//! them into the ordered label/series lists the chart layer consumes.

use crate::aggregate::TallyBoard;
use crate::domain::{BucketKey, OutcomeCategory};

/// How the values in a chart should be read and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    /// Absolute at-bat counts.
    Count,
    /// Percentage shares in `[0, 100]`.
    Percent,
}

/// One outcome category's values, one entry per charted bucket.
#[derive(Debug, Clone)]
pub struct OutcomeSeries {
    pub outcome: OutcomeCategory,
    pub values: Vec<f64>,
}

/// Everything the chart layer needs for one figure.
///
/// `labels` and each series' `values` are parallel, in bucket declaration
/// order. Series always come in the fixed [`OutcomeCategory::ALL`] order.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub unit: ValueUnit,
    pub labels: Vec<String>,
    pub series: Vec<OutcomeSeries>,
    /// Labels of buckets that accumulated nothing and were left out of the
    /// series (only populated for percentage charts, where an empty bucket
    /// has no defined breakdown).
    pub empty: Vec<String>,
}

/// Shape a board's absolute counts for charting.
pub fn counts_chart<K: BucketKey + PartialEq>(
    title: &str,
    board: &TallyBoard<K>,
) -> ChartData {
    let mut labels = Vec::new();
    let mut columns: Vec<[f64; 4]> = Vec::new();
    for (key, tally) in board.buckets() {
        labels.push(key.label());
        let mut column = [0.0f64; 4];
        for outcome in OutcomeCategory::ALL {
            column[outcome.index()] = tally.get(outcome) as f64;
        }
        columns.push(column);
    }

    ChartData {
        title: title.to_string(),
        unit: ValueUnit::Count,
        labels,
        series: transpose(&columns),
        empty: Vec::new(),
    }
}

/// Shape a board's percentage breakdowns for charting.
///
/// Empty buckets are omitted from the series and listed under
/// [`ChartData::empty`] so the chart layer can name them instead of plotting
/// undefined shares.
pub fn ratios_chart<K: BucketKey + PartialEq>(
    title: &str,
    board: &TallyBoard<K>,
) -> ChartData {
    let mut labels = Vec::new();
    let mut columns: Vec<[f64; 4]> = Vec::new();
    let mut empty = Vec::new();
    for (key, ratio) in board.ratios() {
        match ratio {
            Some(ratio) => {
                labels.push(key.label());
                let mut column = [0.0f64; 4];
                for outcome in OutcomeCategory::ALL {
                    column[outcome.index()] = ratio.get(outcome);
                }
                columns.push(column);
            }
            None => empty.push(key.label()),
        }
    }

    ChartData {
        title: title.to_string(),
        unit: ValueUnit::Percent,
        labels,
        series: transpose(&columns),
        empty,
    }
}

/// Per-bucket columns → per-outcome series.
fn transpose(columns: &[[f64; 4]]) -> Vec<OutcomeSeries> {
    OutcomeCategory::ALL
        .iter()
        .map(|&outcome| OutcomeSeries {
            outcome,
            values: columns.iter().map(|c| c[outcome.index()]).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregates;
    use crate::domain::{Handedness, HandednessKey, PitchCategory::*};
    use crate::extract::AtBatSummary;

    fn seeded_aggregates() -> Aggregates {
        let mut agg = Aggregates::standard();
        agg.observe(&AtBatSummary {
            pitches: vec![Fast, Fast, Curve],
            outcome: OutcomeCategory::Strikeout,
            handedness: HandednessKey {
                pitcher: Handedness::Right,
                batter: Handedness::Right,
            },
        });
        agg.observe(&AtBatSummary {
            pitches: vec![Fast, Fast, Curve],
            outcome: OutcomeCategory::Hit,
            handedness: HandednessKey {
                pitcher: Handedness::Left,
                batter: Handedness::Right,
            },
        });
        agg
    }

    #[test]
    fn counts_chart_preserves_bucket_order_and_values() {
        let agg = seeded_aggregates();
        let chart = counts_chart("Absolute Comparison (Pitching Sequence)", &agg.sequences);

        assert_eq!(chart.unit, ValueUnit::Count);
        assert_eq!(chart.labels.len(), 4);
        assert_eq!(chart.labels[0], "fast, fast, curve");
        assert_eq!(chart.series.len(), 4);

        // Series come in the fixed hit/hitout/strikeout/walk order.
        assert_eq!(chart.series[0].outcome, OutcomeCategory::Hit);
        assert_eq!(chart.series[0].values, vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(chart.series[2].outcome, OutcomeCategory::Strikeout);
        assert_eq!(chart.series[2].values, vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn ratios_chart_omits_and_names_empty_buckets() {
        let agg = seeded_aggregates();
        let chart = ratios_chart("Percentage Comparison (Pitching Sequence)", &agg.sequences);

        assert_eq!(chart.unit, ValueUnit::Percent);
        // Only the seeded bucket has a defined breakdown.
        assert_eq!(chart.labels, vec!["fast, fast, curve"]);
        assert_eq!(chart.empty.len(), 3);
        assert_eq!(chart.series[0].values, vec![50.0]);
        assert_eq!(chart.series[2].values, vec![50.0]);
    }

    #[test]
    fn reshaping_never_alters_totals() {
        let agg = seeded_aggregates();
        let chart = counts_chart("t", &agg.sequences);
        let charted: f64 = chart.series.iter().flat_map(|s| s.values.iter()).sum();
        assert_eq!(charted as u64, agg.sequences.total());
    }
}
