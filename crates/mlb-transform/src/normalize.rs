//! Per-record normalization of the two source tables.
//!
//! Both functions return new frames; the inputs are left untouched. Key and
//! counting columns are cast to `Int64` (non-strict, so unparsable cells
//! become null) and the identifier columns to strings.

use mlb_model::ComputationWarning;
use mlb_model::columns::{
    AT_BATS, AVG_RBI_PER_GAME, BATTING_AVERAGE, BATTING_REQUIRED, FRANCH_ID, GAMES, HITS,
    HOME_RUNS, RUNS, RUNS_ALLOWED, TEAM, TEAM_ID, TEAMS_REQUIRED, YEAR_ID,
};
use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, require_columns};

/// Table name used in warnings about the batting table.
pub const BATTING_TABLE: &str = "batting";
/// Table name used in warnings about the team table.
pub const TEAMS_TABLE: &str = "teams";

/// A normalized table plus the conditions found while deriving its metrics.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub data: DataFrame,
    pub warnings: Vec<ComputationWarning>,
}

/// `numerator / denominator` as `Float64`, null when the denominator is zero
/// or either side is null.
pub fn ratio_expr(numerator: Expr, denominator: Expr) -> Expr {
    let denominator = denominator.cast(DataType::Float64);
    when(denominator.clone().eq(lit(0.0)))
        .then(lit(NULL).cast(DataType::Float64))
        .otherwise(numerator.cast(DataType::Float64) / denominator)
}

fn int_columns(names: &[&str]) -> Vec<Expr> {
    names
        .iter()
        .map(|name| col(*name).cast(DataType::Int64))
        .collect()
}

/// Nulls in a derived column become a [`ComputationWarning::ZeroDenominator`].
pub(crate) fn undefined_ratio_warning(
    df: &DataFrame,
    table: &str,
    metric: &str,
) -> Result<Option<ComputationWarning>> {
    let rows = df.column(metric)?.null_count();
    if rows == 0 {
        return Ok(None);
    }
    warn!(table, metric, rows, "ratio left missing for zero or missing denominator");
    Ok(Some(ComputationWarning::zero_denominator(table, metric, rows)))
}

/// Adds `team`, `avg_rbi_per_game` (R / G) and `batting_average` (H / AB).
pub fn normalize_batting(batting: &DataFrame) -> Result<Normalized> {
    require_columns(batting, BATTING_TABLE, BATTING_REQUIRED)?;

    let data = batting
        .clone()
        .lazy()
        .with_columns(int_columns(&[YEAR_ID, RUNS, GAMES, HITS, AT_BATS, HOME_RUNS]))
        .with_column(col(TEAM_ID).cast(DataType::String))
        .with_columns([
            col(TEAM_ID).alias(TEAM),
            ratio_expr(col(RUNS), col(GAMES)).alias(AVG_RBI_PER_GAME),
            ratio_expr(col(HITS), col(AT_BATS)).alias(BATTING_AVERAGE),
        ])
        .collect()?;

    let mut warnings = Vec::new();
    for metric in [AVG_RBI_PER_GAME, BATTING_AVERAGE] {
        warnings.extend(undefined_ratio_warning(&data, BATTING_TABLE, metric)?);
    }

    debug!(rows = data.height(), "normalized batting table");
    Ok(Normalized { data, warnings })
}

/// Adds `team` as a copy of the franchise identifier.
pub fn normalize_teams(teams: &DataFrame) -> Result<DataFrame> {
    require_columns(teams, TEAMS_TABLE, TEAMS_REQUIRED)?;

    let data = teams
        .clone()
        .lazy()
        .with_columns(int_columns(&[YEAR_ID, RUNS, RUNS_ALLOWED, HOME_RUNS]))
        .with_columns([
            col(TEAM_ID).cast(DataType::String),
            col(FRANCH_ID).cast(DataType::String),
        ])
        .with_column(col(FRANCH_ID).alias(TEAM))
        .collect()?;

    debug!(rows = data.height(), "normalized team table");
    Ok(data)
}
