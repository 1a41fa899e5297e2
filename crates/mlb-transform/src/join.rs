//! Join of the normalized batting and team tables.
//!
//! Every non-key column carried by both tables is a collision. The losing
//! copy is dropped before the join, so the merged table never holds suffixed
//! duplicates. The join is strictly inner on (`yearID`, `teamID`).

use mlb_model::columns::{JOIN_KEYS, RBI_CONTRIBUTION_RATE, RUNS, RUNS_ALLOWED, TEAM_ID, YEAR_ID};
use mlb_model::{ComputationWarning, JoinPrecedence, JoinSide};
use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, require_columns};
use crate::normalize::{BATTING_TABLE, TEAMS_TABLE, ratio_expr, undefined_ratio_warning};

/// Table name used in warnings about the merged table.
pub const MERGED_TABLE: &str = "merged";

const KEY_COUNT: &str = "key_count";

/// A column present in both inputs and the side that kept it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub column: String,
    pub winner: JoinSide,
}

/// Result of [`merge_batting_teams`].
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub merged: DataFrame,
    pub collisions: Vec<Collision>,
    pub warnings: Vec<ComputationWarning>,
}

/// Join arguments that keep the row order of the left input.
pub(crate) fn ordered_join(how: JoinType) -> JoinArgs {
    JoinArgs {
        maintain_order: MaintainOrderJoin::Left,
        ..JoinArgs::new(how)
    }
}

fn key_exprs() -> [Expr; 2] {
    JOIN_KEYS.map(col)
}

/// Collisions in batting column order, each tagged with its winner.
pub fn detect_collisions(
    batting: &DataFrame,
    teams: &DataFrame,
    precedence: &JoinPrecedence,
) -> Vec<Collision> {
    batting
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .filter(|name| !JOIN_KEYS.contains(name))
        .filter(|name| teams.get_column_index(name).is_some())
        .map(|name| Collision {
            column: name.to_string(),
            winner: precedence.winner(name),
        })
        .collect()
}

/// Number of (`yearID`, `teamID`) keys occurring more than once.
pub fn count_duplicate_keys(df: &DataFrame) -> Result<usize> {
    let repeated = df
        .clone()
        .lazy()
        .group_by(key_exprs())
        .agg([len().alias(KEY_COUNT)])
        .filter(col(KEY_COUNT).gt(lit(1)))
        .collect()?;
    Ok(repeated.height())
}

fn without(df: &DataFrame, dropped: &[&str]) -> Result<DataFrame> {
    let kept: Vec<PlSmallStr> = df
        .get_column_names()
        .into_iter()
        .filter(|name| !dropped.contains(&name.as_str()))
        .cloned()
        .collect();
    Ok(df.select(kept)?)
}

/// Inner-joins batting rows to their team season and derives
/// `rbi_contribution_rate = R / (R + RA)` from the resolved columns.
///
/// Repeated keys in the team table fan out batting rows; they are reported
/// as a [`ComputationWarning::DuplicateKeys`] rather than rejected.
pub fn merge_batting_teams(
    batting: &DataFrame,
    teams: &DataFrame,
    precedence: &JoinPrecedence,
) -> Result<JoinOutcome> {
    require_columns(batting, BATTING_TABLE, &JOIN_KEYS)?;
    require_columns(teams, TEAMS_TABLE, &JOIN_KEYS)?;

    let collisions = detect_collisions(batting, teams, precedence);
    let dropped_from = |side: JoinSide| -> Vec<&str> {
        collisions
            .iter()
            .filter(|c| c.winner != side)
            .map(|c| c.column.as_str())
            .collect()
    };
    let left = without(batting, &dropped_from(JoinSide::Batting))?;
    let right = without(teams, &dropped_from(JoinSide::Teams))?;

    // Both metric operands must survive resolution, from whichever side.
    require_columns(&left, BATTING_TABLE, &[RUNS])
        .or_else(|_| require_columns(&right, TEAMS_TABLE, &[RUNS]))?;
    require_columns(&right, TEAMS_TABLE, &[RUNS_ALLOWED])
        .or_else(|_| require_columns(&left, BATTING_TABLE, &[RUNS_ALLOWED]))?;

    let mut warnings = Vec::new();
    let duplicates = count_duplicate_keys(teams)?;
    if duplicates > 0 {
        warn!(
            table = TEAMS_TABLE,
            keys = duplicates,
            "repeated ({YEAR_ID}, {TEAM_ID}) keys in team table"
        );
        warnings.push(ComputationWarning::duplicate_keys(TEAMS_TABLE, duplicates));
    }

    let merged = left
        .lazy()
        .join(
            right.lazy(),
            key_exprs(),
            key_exprs(),
            ordered_join(JoinType::Inner),
        )
        .with_column(
            ratio_expr(col(RUNS), col(RUNS) + col(RUNS_ALLOWED)).alias(RBI_CONTRIBUTION_RATE),
        )
        .collect()?;

    warnings.extend(undefined_ratio_warning(
        &merged,
        MERGED_TABLE,
        RBI_CONTRIBUTION_RATE,
    )?);

    debug!(
        rows = merged.height(),
        collisions = collisions.len(),
        "joined batting and team tables"
    );

    Ok(JoinOutcome {
        merged,
        collisions,
        warnings,
    })
}
