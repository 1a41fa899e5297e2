//! Quadrant placement of team seasons on the efficiency matrix.

use mlb_model::columns::{AVG_RBI_PER_GAME, QUADRANT, RBI_CONTRIBUTION_RATE};
use mlb_model::{LegendEntry, QUADRANT_LEGEND, Quadrant};
use polars::prelude::*;
use serde::Serialize;

use crate::aggregate::efficiency_points;
use crate::error::{Result, require_columns};

const EFFICIENCY_TABLE: &str = "team efficiency";

/// Padding applied to the observed extremes of an axis.
const RANGE_LOWER_FACTOR: f64 = 0.95;
const RANGE_UPPER_FACTOR: f64 = 1.05;

/// Plot range of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// `[min * 0.95, max * 1.05]` over the present values, `None` when there are none.
    pub fn padded(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = values.into_iter().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })?;
        Some(Self {
            min: min * RANGE_LOWER_FACTOR,
            max: max * RANGE_UPPER_FACTOR,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantCount {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub count: usize,
}

/// Means, axis ranges and bucket counts of a team efficiency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantSummary {
    pub rows: usize,
    pub mean_avg_rbi_per_game: Option<f64>,
    pub mean_rbi_contribution_rate: Option<f64>,
    pub x_range: Option<AxisRange>,
    pub y_range: Option<AxisRange>,
    /// Counts in legend order.
    pub counts: Vec<QuadrantCount>,
    pub unclassified: usize,
    pub legend: Vec<LegendEntry>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

impl QuadrantSummary {
    /// Quadrant of one row, `None` when a metric or a mean is missing.
    pub fn classify(&self, rbi: Option<f64>, contribution: Option<f64>) -> Option<Quadrant> {
        Some(Quadrant::classify(
            rbi?,
            contribution?,
            self.mean_avg_rbi_per_game?,
            self.mean_rbi_contribution_rate?,
        ))
    }

    pub fn count(&self, quadrant: Quadrant) -> usize {
        self.counts
            .iter()
            .find(|c| c.quadrant == quadrant)
            .map_or(0, |c| c.count)
    }

    /// Copy of `efficiency` with a nullable `quadrant` label column appended.
    pub fn annotate(&self, efficiency: &DataFrame) -> Result<DataFrame> {
        let labels: Vec<Option<&str>> = efficiency_points(efficiency)?
            .into_iter()
            .map(|(x, y)| self.classify(x, y).map(|q| q.label()))
            .collect();

        let mut annotated = efficiency.clone();
        annotated.with_column(Column::new(QUADRANT.into(), labels))?;
        Ok(annotated)
    }
}

/// Summarizes the team efficiency table for the quadrant chart.
///
/// Means skip missing values. A value equal to its mean counts as high.
pub fn quadrant_summary(efficiency: &DataFrame) -> Result<QuadrantSummary> {
    require_columns(
        efficiency,
        EFFICIENCY_TABLE,
        &[AVG_RBI_PER_GAME, RBI_CONTRIBUTION_RATE],
    )?;

    let points = efficiency_points(efficiency)?;
    let xs: Vec<f64> = points.iter().filter_map(|(x, _)| *x).collect();
    let ys: Vec<f64> = points.iter().filter_map(|(_, y)| *y).collect();

    let mut summary = QuadrantSummary {
        rows: points.len(),
        mean_avg_rbi_per_game: mean(&xs),
        mean_rbi_contribution_rate: mean(&ys),
        x_range: AxisRange::padded(xs.iter().copied()),
        y_range: AxisRange::padded(ys.iter().copied()),
        counts: Quadrant::ALL
            .iter()
            .map(|q| QuadrantCount {
                quadrant: *q,
                label: q.label(),
                count: 0,
            })
            .collect(),
        unclassified: 0,
        legend: QUADRANT_LEGEND.to_vec(),
    };

    for (x, y) in points {
        match summary.classify(x, y) {
            Some(quadrant) => {
                if let Some(entry) = summary.counts.iter_mut().find(|c| c.quadrant == quadrant) {
                    entry.count += 1;
                }
            }
            None => summary.unclassified += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlb_common::column_str;
    use polars::df;

    fn efficiency() -> DataFrame {
        df!(
            "year" => [2000i64, 2000, 2001, 2001, 2002],
            "team" => ["AAA", "BBB", "AAA", "BBB", "CCC"],
            "avg_rbi_per_game" => [Some(0.2), Some(0.4), Some(0.3), Some(0.1), None],
            "rbi_contribution_rate" => [Some(0.5), Some(0.4), Some(0.45), Some(0.55), Some(0.9)]
        )
        .unwrap()
    }

    #[test]
    fn means_and_ranges_skip_missing() {
        let summary = quadrant_summary(&efficiency()).unwrap();
        assert_eq!(summary.rows, 5);
        assert!((summary.mean_avg_rbi_per_game.unwrap() - 0.25).abs() < 1e-12);
        assert!((summary.mean_rbi_contribution_rate.unwrap() - 0.56).abs() < 1e-12);

        let x = summary.x_range.unwrap();
        assert!((x.min - 0.1 * 0.95).abs() < 1e-12);
        assert!((x.max - 0.4 * 1.05).abs() < 1e-12);
    }

    #[test]
    fn rows_are_bucketed_against_the_means() {
        let summary = quadrant_summary(&efficiency()).unwrap();
        // mean x = 0.25, mean y = 0.56: every classified row is below on y
        assert_eq!(summary.count(Quadrant::HighRbiLowContribution), 2);
        assert_eq!(summary.count(Quadrant::LowRbiLowContribution), 2);
        assert_eq!(summary.count(Quadrant::HighRbiHighContribution), 0);
        assert_eq!(summary.unclassified, 1);
        assert_eq!(summary.legend.len(), 4);
    }

    #[test]
    fn value_at_the_mean_is_high() {
        let df = df!(
            "avg_rbi_per_game" => [0.5, 0.5],
            "rbi_contribution_rate" => [0.5, 0.5]
        )
        .unwrap();
        let summary = quadrant_summary(&df).unwrap();
        assert_eq!(summary.count(Quadrant::HighRbiHighContribution), 2);
    }

    #[test]
    fn annotate_appends_labels() {
        let efficiency = efficiency();
        let summary = quadrant_summary(&efficiency).unwrap();
        let annotated = summary.annotate(&efficiency).unwrap();

        assert_eq!(annotated.width(), efficiency.width() + 1);
        let labels = column_str(&annotated, QUADRANT).unwrap();
        assert_eq!(
            labels[0].as_deref(),
            Some("Low Avg RBI + Low Contribution")
        );
        assert_eq!(
            labels[1].as_deref(),
            Some("High Avg RBI + Low Contribution")
        );
        assert_eq!(labels[4], None);
    }

    #[test]
    fn empty_table_has_no_means() {
        let df = df!(
            "avg_rbi_per_game" => Vec::<f64>::new(),
            "rbi_contribution_rate" => Vec::<f64>::new()
        )
        .unwrap();
        let summary = quadrant_summary(&df).unwrap();
        assert_eq!(summary.mean_avg_rbi_per_game, None);
        assert_eq!(summary.x_range, None);
        assert_eq!(summary.unclassified, 0);
    }
}
