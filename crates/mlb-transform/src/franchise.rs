//! Franchises with a long enough history in the team table.
//!
//! The result is an explicit intermediate: it is reported by the pipeline
//! but does not restrict the join or the summaries.

use std::collections::BTreeSet;

use mlb_model::columns::FRANCH_ID;
use polars::prelude::*;
use tracing::debug;

use crate::error::{Result, require_columns};
use crate::join::ordered_join;
use crate::normalize::TEAMS_TABLE;

const SEASON_COUNT: &str = "season_count";

/// Franchises with at least `min_seasons` team-season rows.
#[derive(Debug, Clone)]
pub struct EstablishedFranchises {
    pub min_seasons: u32,
    pub franchises: BTreeSet<String>,
    /// Team rows belonging to an established franchise, in input order.
    pub teams: DataFrame,
}

impl EstablishedFranchises {
    pub fn len(&self) -> usize {
        self.franchises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.franchises.is_empty()
    }

    pub fn contains(&self, franchise: &str) -> bool {
        self.franchises.contains(franchise)
    }
}

/// Counts team-season rows per franchise and keeps those with at least
/// `min_seasons` of them.
pub fn established_franchises(teams: &DataFrame, min_seasons: u32) -> Result<EstablishedFranchises> {
    require_columns(teams, TEAMS_TABLE, &[FRANCH_ID])?;

    let teams = teams
        .clone()
        .lazy()
        .with_column(col(FRANCH_ID).cast(DataType::String))
        .collect()?;

    let established = teams
        .clone()
        .lazy()
        .filter(col(FRANCH_ID).is_not_null())
        .group_by_stable([col(FRANCH_ID)])
        .agg([len().alias(SEASON_COUNT)])
        .filter(col(SEASON_COUNT).gt_eq(lit(min_seasons)))
        .select([col(FRANCH_ID)])
        .collect()?;

    let franchises: BTreeSet<String> = mlb_common::column_str(&established, FRANCH_ID)?
        .into_iter()
        .flatten()
        .collect();

    let filtered = teams
        .lazy()
        .join(
            established.lazy(),
            [col(FRANCH_ID)],
            [col(FRANCH_ID)],
            ordered_join(JoinType::Inner),
        )
        .collect()?;

    debug!(
        franchises = franchises.len(),
        rows = filtered.height(),
        min_seasons,
        "computed established franchises"
    );

    Ok(EstablishedFranchises {
        min_seasons,
        franchises,
        teams: filtered,
    })
}
