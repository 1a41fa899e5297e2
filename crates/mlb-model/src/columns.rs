//! Column names shared by every pipeline stage.
//!
//! Source names follow the Lahman CSV headers. Derived and output names are
//! the ones the charts consume.

/// Season year in both source tables.
pub const YEAR_ID: &str = "yearID";
/// Per-season short team code in both source tables.
pub const TEAM_ID: &str = "teamID";
/// Long-lived franchise identity in the team table.
pub const FRANCH_ID: &str = "franchID";

pub const RUNS: &str = "R";
pub const RUNS_ALLOWED: &str = "RA";
pub const GAMES: &str = "G";
pub const HITS: &str = "H";
pub const AT_BATS: &str = "AB";
pub const HOME_RUNS: &str = "HR";

/// Unified team identifier added by normalization.
pub const TEAM: &str = "team";
pub const AVG_RBI_PER_GAME: &str = "avg_rbi_per_game";
pub const BATTING_AVERAGE: &str = "batting_average";
pub const RBI_CONTRIBUTION_RATE: &str = "rbi_contribution_rate";

/// Output name for the season column.
pub const YEAR: &str = "year";
pub const HR_PER_TEAM: &str = "hr_per_team";
pub const TEAM_FULL_NAME: &str = "team_full_name";
pub const COLOR: &str = "color";
pub const QUADRANT: &str = "quadrant";

/// Columns the batting file must carry.
pub const BATTING_REQUIRED: &[&str] = &[YEAR_ID, TEAM_ID, RUNS, GAMES, HITS, AT_BATS, HOME_RUNS];

/// Columns the team file must carry.
pub const TEAMS_REQUIRED: &[&str] = &[YEAR_ID, TEAM_ID, FRANCH_ID, RUNS, RUNS_ALLOWED, HOME_RUNS];

/// Join keys shared by the batting and team tables.
pub const JOIN_KEYS: [&str; 2] = [YEAR_ID, TEAM_ID];

/// Column order of the yearly batting summary.
pub const YEARLY_SUMMARY_COLUMNS: [&str; 6] =
    [YEAR, HOME_RUNS, HITS, AT_BATS, BATTING_AVERAGE, HR_PER_TEAM];

/// Column order of the team efficiency summary.
pub const TEAM_EFFICIENCY_COLUMNS: [&str; 6] = [
    YEAR,
    TEAM,
    AVG_RBI_PER_GAME,
    RBI_CONTRIBUTION_RATE,
    TEAM_FULL_NAME,
    COLOR,
];
