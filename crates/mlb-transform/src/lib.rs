//! Transformation stages of the MLB batting trends pipeline.
//!
//! Each stage takes the previous stage's table as an argument and returns a
//! new one:
//!
//! - **normalize**: typed key columns, `team` and the per-record ratios
//! - **franchise**: franchises with enough seasons in the team table
//! - **join**: collision resolution and the inner batting/team join
//! - **aggregate**: yearly batting summary and team efficiency summary
//! - **quadrant**: means, axis ranges and quadrant labels for team seasons

pub mod aggregate;
pub mod error;
pub mod franchise;
pub mod join;
pub mod normalize;
pub mod quadrant;

pub use aggregate::{
    BATTING_AVERAGE_DECIMALS, EfficiencyOutcome, efficiency_points, team_efficiency_summary,
    yearly_batting_summary,
};
pub use error::{Result, TransformError};
pub use franchise::{EstablishedFranchises, established_franchises};
pub use join::{
    Collision, JoinOutcome, MERGED_TABLE, count_duplicate_keys, detect_collisions,
    merge_batting_teams,
};
pub use normalize::{
    BATTING_TABLE, Normalized, TEAMS_TABLE, normalize_batting, normalize_teams, ratio_expr,
};
pub use quadrant::{AxisRange, QuadrantCount, QuadrantSummary, quadrant_summary};
