//! Configuration options for the pipeline stages.

use serde::{Deserialize, Serialize};

use crate::columns::RUNS_ALLOWED;
use crate::teams::MODERN_ROSTER;

/// First season of the expansion era used for team comparisons.
pub const MODERN_ERA_START: i64 = 1969;

/// Minimum team-season rows for a franchise to count as established.
pub const MIN_FRANCHISE_SEASONS: u32 = 5;

/// Which source table keeps a column when both tables carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinSide {
    Batting,
    Teams,
}

/// Collision policy for the batting/team join.
///
/// Every column present in both tables (other than the join keys) is kept
/// from the batting table, except the ones listed in `teams_preferred`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPrecedence {
    pub teams_preferred: Vec<String>,
}

impl Default for JoinPrecedence {
    fn default() -> Self {
        Self {
            teams_preferred: vec![RUNS_ALLOWED.to_string()],
        }
    }
}

impl JoinPrecedence {
    /// The side whose value survives for `column`.
    pub fn winner(&self, column: &str) -> JoinSide {
        if self.teams_preferred.iter().any(|name| name == column) {
            JoinSide::Teams
        } else {
            JoinSide::Batting
        }
    }
}

/// Options for the team efficiency summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyOptions {
    /// Inclusive lower bound on the season.
    pub min_year: i64,
    /// Team abbreviations kept in the summary.
    pub roster: Vec<String>,
}

impl Default for EfficiencyOptions {
    fn default() -> Self {
        Self {
            min_year: MODERN_ERA_START,
            roster: MODERN_ROSTER.iter().map(|team| (*team).to_string()).collect(),
        }
    }
}

impl EfficiencyOptions {
    #[must_use]
    pub fn with_min_year(mut self, min_year: i64) -> Self {
        self.min_year = min_year;
        self
    }

    #[must_use]
    pub fn with_roster<I, S>(mut self, roster: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster = roster.into_iter().map(Into::into).collect();
        self
    }
}

/// Options controlling a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub min_franchise_seasons: u32,
    pub join: JoinPrecedence,
    pub efficiency: EfficiencyOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            min_franchise_seasons: MIN_FRANCHISE_SEASONS,
            join: JoinPrecedence::default(),
            efficiency: EfficiencyOptions::default(),
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn with_efficiency(mut self, efficiency: EfficiencyOptions) -> Self {
        self.efficiency = efficiency;
        self
    }
}
