//! Data model for the MLB batting trends pipeline.
//!
//! Holds everything the stages share but do not compute: column names, the
//! modern-era roster with its display lookups, run options, the quadrant
//! legend and the recoverable warning type.

pub mod columns;
pub mod options;
pub mod quadrant;
pub mod teams;
pub mod warnings;

pub use options::{
    EfficiencyOptions, JoinPrecedence, JoinSide, MIN_FRANCHISE_SEASONS, MODERN_ERA_START,
    PipelineOptions,
};
pub use quadrant::{LegendEntry, QUADRANT_LEGEND, Quadrant};
pub use teams::{MODERN_ROSTER, TEAM_COLORS, TEAM_NAMES, TeamLookup};
pub use warnings::ComputationWarning;
