//! Yearly and per-team aggregations over the merged table.
//!
//! Both summaries are sorted ascending by year. Rounding happens after the
//! Polars plan has been collected so the half-to-even rule is applied in one
//! place.

use std::collections::BTreeSet;

use mlb_common::{checked_ratio, column_f64, column_i64, column_str, round_half_even};
use mlb_model::columns::{
    AT_BATS, AVG_RBI_PER_GAME, BATTING_AVERAGE, COLOR, HITS, HOME_RUNS, HR_PER_TEAM,
    RBI_CONTRIBUTION_RATE, TEAM, TEAM_EFFICIENCY_COLUMNS, TEAM_FULL_NAME, YEAR, YEAR_ID,
    YEARLY_SUMMARY_COLUMNS,
};
use mlb_model::{ComputationWarning, EfficiencyOptions, TeamLookup};
use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, require_columns};
use crate::join::{MERGED_TABLE, ordered_join};

const TEAM_COUNT: &str = "team_count";

/// Decimal places kept for the yearly batting average.
pub const BATTING_AVERAGE_DECIMALS: u32 = 3;

/// Team efficiency table plus lookup gaps found while enriching it.
#[derive(Debug, Clone)]
pub struct EfficiencyOutcome {
    pub summary: DataFrame,
    pub warnings: Vec<ComputationWarning>,
}

fn counting_sums() -> [Expr; 3] {
    [HOME_RUNS, HITS, AT_BATS].map(|name| col(name).sum())
}

/// One row per year: `{year, HR, H, AB, batting_average, hr_per_team}`.
///
/// Counting stats are summed per (year, team) first and then per year.
/// `hr_per_team` divides by the number of distinct teams in the merged
/// table for that year and is `0` when there are none.
pub fn yearly_batting_summary(merged: &DataFrame) -> Result<DataFrame> {
    require_columns(
        merged,
        MERGED_TABLE,
        &[YEAR_ID, TEAM, HOME_RUNS, HITS, AT_BATS],
    )?;

    let per_year = merged
        .clone()
        .lazy()
        .group_by_stable([col(YEAR_ID), col(TEAM)])
        .agg(counting_sums())
        .group_by_stable([col(YEAR_ID)])
        .agg(counting_sums());

    let team_counts = merged
        .clone()
        .lazy()
        .group_by_stable([col(YEAR_ID)])
        .agg([col(TEAM).drop_nulls().n_unique().alias(TEAM_COUNT)]);

    let totals = per_year
        .join(
            team_counts,
            [col(YEAR_ID)],
            [col(YEAR_ID)],
            ordered_join(JoinType::Left),
        )
        .sort_by_exprs([col(YEAR_ID)], SortMultipleOptions::default())
        .collect()?;

    let home_runs = column_i64(&totals, HOME_RUNS)?;
    let hits = column_i64(&totals, HITS)?;
    let at_bats = column_i64(&totals, AT_BATS)?;
    let team_counts = column_i64(&totals, TEAM_COUNT)?;

    let batting_average: Vec<Option<f64>> = hits
        .iter()
        .zip(&at_bats)
        .map(|(h, ab)| {
            checked_ratio(h.map(|v| v as f64), ab.map(|v| v as f64))
                .map(|ratio| round_half_even(ratio, BATTING_AVERAGE_DECIMALS))
        })
        .collect();

    let hr_per_team: Vec<i64> = home_runs
        .iter()
        .zip(&team_counts)
        .map(|(hr, teams)| match (hr, teams) {
            (Some(hr), Some(teams)) if *teams > 0 => {
                round_half_even(*hr as f64 / *teams as f64, 0) as i64
            }
            _ => 0,
        })
        .collect();

    let mut summary = totals;
    summary.with_column(Column::new(BATTING_AVERAGE.into(), batting_average))?;
    summary.with_column(Column::new(HR_PER_TEAM.into(), hr_per_team))?;
    summary.rename(YEAR_ID, YEAR.into())?;
    let summary = summary.select(YEARLY_SUMMARY_COLUMNS)?;

    debug!(years = summary.height(), "built yearly batting summary");
    Ok(summary)
}

/// `team` equals one of the roster abbreviations.
fn roster_predicate(roster: &[String]) -> Expr {
    roster.iter().fold(lit(false), |acc, team| {
        acc.or(col(TEAM).eq(lit(team.as_str())))
    })
}

/// One row per (year, team) on the roster from `options.min_year` on:
/// `{year, team, avg_rbi_per_game, rbi_contribution_rate, team_full_name, color}`.
///
/// Rate columns are group means with nulls skipped. Teams missing from a
/// lookup get a null display field and one warning per (team, field).
pub fn team_efficiency_summary(
    merged: &DataFrame,
    options: &EfficiencyOptions,
    lookup: &TeamLookup,
) -> Result<EfficiencyOutcome> {
    require_columns(
        merged,
        MERGED_TABLE,
        &[YEAR_ID, TEAM, AVG_RBI_PER_GAME, RBI_CONTRIBUTION_RATE],
    )?;

    let mut summary = merged
        .clone()
        .lazy()
        .filter(
            col(YEAR_ID)
                .gt_eq(lit(options.min_year))
                .and(roster_predicate(&options.roster)),
        )
        .group_by_stable([col(YEAR_ID), col(TEAM)])
        .agg([
            col(AVG_RBI_PER_GAME).mean(),
            col(RBI_CONTRIBUTION_RATE).mean(),
        ])
        .sort_by_exprs([col(YEAR_ID), col(TEAM)], SortMultipleOptions::default())
        .collect()?;

    let teams = column_str(&summary, TEAM)?;
    let mut missing = BTreeSet::new();
    let mut names = Vec::with_capacity(teams.len());
    let mut colors = Vec::with_capacity(teams.len());

    for team in &teams {
        let team = team.as_deref().unwrap_or_default();
        let name = lookup.full_name(team);
        let color = lookup.color(team);
        if name.is_none() {
            missing.insert((team.to_string(), TEAM_FULL_NAME));
        }
        if color.is_none() {
            missing.insert((team.to_string(), COLOR));
        }
        names.push(name);
        colors.push(color);
    }

    summary.rename(YEAR_ID, YEAR.into())?;
    summary.with_column(Column::new(TEAM_FULL_NAME.into(), names))?;
    summary.with_column(Column::new(COLOR.into(), colors))?;
    let summary = summary.select(TEAM_EFFICIENCY_COLUMNS)?;

    let warnings: Vec<ComputationWarning> = missing
        .into_iter()
        .map(|(team, field)| {
            warn!(team = %team, field, "team missing from display lookup");
            ComputationWarning::missing_lookup(&team, field)
        })
        .collect();

    debug!(rows = summary.height(), "built team efficiency summary");
    Ok(EfficiencyOutcome { summary, warnings })
}

/// Rate columns of the efficiency summary as `(avg_rbi_per_game, rbi_contribution_rate)`.
pub fn efficiency_points(summary: &DataFrame) -> Result<Vec<(Option<f64>, Option<f64>)>> {
    let x = column_f64(summary, AVG_RBI_PER_GAME)?;
    let y = column_f64(summary, RBI_CONTRIBUTION_RATE)?;
    Ok(x.into_iter().zip(y).collect())
}
