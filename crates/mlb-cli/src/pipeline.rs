//! Batting trends pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Read and fingerprint the batting and team CSV files
//! 2. **Normalize**: Type the key columns, add `team` and per-record ratios
//! 3. **Franchises**: Find established franchises (reported, not applied)
//! 4. **Join**: Resolve column collisions and inner-join on (`yearID`, `teamID`)
//! 5. **Aggregate**: Yearly batting summary, team efficiency summary, quadrants
//!
//! Each stage takes the output of the previous stage and returns typed results.
//! Writing files is left to [`crate::output`].

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use mlb_ingest::{SourceFingerprint, SourceTables, load_sources};
use mlb_model::{ComputationWarning, PipelineOptions, TeamLookup};
use mlb_transform::{
    Collision, QuadrantSummary, established_franchises, merge_batting_teams, normalize_batting,
    normalize_teams, quadrant_summary, team_efficiency_summary, yearly_batting_summary,
};

use crate::types::StageCounts;

/// Default location of the Lahman batting export.
pub const DEFAULT_BATTING_PATH: &str = "lahman_1871-2023_csv/Batting.csv";
/// Default location of the Lahman team export.
pub const DEFAULT_TEAMS_PATH: &str = "lahman_1871-2023_csv/Teams.csv";

/// Source file locations for one run.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    pub batting: PathBuf,
    pub teams: PathBuf,
}

impl Default for PipelineInputs {
    fn default() -> Self {
        Self {
            batting: PathBuf::from(DEFAULT_BATTING_PATH),
            teams: PathBuf::from(DEFAULT_TEAMS_PATH),
        }
    }
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage.
#[derive(Debug)]
pub struct NormalizeResult {
    pub batting: DataFrame,
    pub teams: DataFrame,
    pub warnings: Vec<ComputationWarning>,
}

/// Normalize both source tables.
pub fn normalize(sources: &SourceTables) -> Result<NormalizeResult> {
    let batting = normalize_batting(&sources.batting.data).with_context(|| {
        format!(
            "normalize batting table {}",
            sources.batting.fingerprint.path.display()
        )
    })?;
    let teams = normalize_teams(&sources.teams.data).with_context(|| {
        format!(
            "normalize team table {}",
            sources.teams.fingerprint.path.display()
        )
    })?;
    Ok(NormalizeResult {
        batting: batting.data,
        teams,
        warnings: batting.warnings,
    })
}

// ============================================================================
// Stage 5: Aggregate
// ============================================================================

/// Result of the aggregate stage.
#[derive(Debug)]
pub struct AggregateResult {
    pub yearly: DataFrame,
    /// Team efficiency summary with the `quadrant` column appended.
    pub efficiency: DataFrame,
    pub quadrant: QuadrantSummary,
    pub warnings: Vec<ComputationWarning>,
}

/// Build the summary tables from the merged table.
pub fn aggregate(
    merged: &DataFrame,
    options: &PipelineOptions,
    lookup: &TeamLookup,
) -> Result<AggregateResult> {
    let yearly = yearly_batting_summary(merged).context("build yearly batting summary")?;
    let efficiency = team_efficiency_summary(merged, &options.efficiency, lookup)
        .context("build team efficiency summary")?;
    let quadrant = quadrant_summary(&efficiency.summary).context("build quadrant summary")?;
    let annotated = quadrant
        .annotate(&efficiency.summary)
        .context("label quadrants")?;
    Ok(AggregateResult {
        yearly,
        efficiency: annotated,
        quadrant,
        warnings: efficiency.warnings,
    })
}

// ============================================================================
// Full run
// ============================================================================

/// Established-franchise result as reported by a run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FranchiseReport {
    pub min_seasons: u32,
    pub franchises: BTreeSet<String>,
    pub team_rows: usize,
}

/// Everything a run produces before anything is written.
#[derive(Debug)]
pub struct PipelineOutput {
    pub inputs: Vec<SourceFingerprint>,
    pub options: PipelineOptions,
    pub counts: StageCounts,
    pub collisions: Vec<Collision>,
    pub franchises: FranchiseReport,
    pub yearly: DataFrame,
    pub efficiency: DataFrame,
    pub quadrant: QuadrantSummary,
    /// Warnings from every stage, in stage order.
    pub warnings: Vec<ComputationWarning>,
}

fn log_warnings(stage: &str, warnings: &[ComputationWarning]) {
    for warning in warnings {
        warn!(stage, "{warning}");
    }
}

/// Run every stage over the given inputs.
pub fn run_pipeline(
    inputs: &PipelineInputs,
    options: &PipelineOptions,
    lookup: &TeamLookup,
) -> Result<PipelineOutput> {
    // =========================================================================
    // Stage 1: Load
    // =========================================================================
    let load_span = info_span!(
        "load",
        batting = %inputs.batting.display(),
        teams = %inputs.teams.display()
    );
    let load_start = Instant::now();
    let sources = load_span
        .in_scope(|| load_sources(&inputs.batting, &inputs.teams))
        .context("load source tables")?;
    info!(
        batting_rows = sources.batting.data.height(),
        team_rows = sources.teams.data.height(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    // =========================================================================
    // Stage 2: Normalize
    // =========================================================================
    let normalize_start = Instant::now();
    let normalized = info_span!("normalize").in_scope(|| normalize(&sources))?;
    log_warnings("normalize", &normalized.warnings);
    info!(
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );

    // =========================================================================
    // Stage 3: Established franchises
    // =========================================================================
    let established = info_span!("franchises")
        .in_scope(|| established_franchises(&normalized.teams, options.min_franchise_seasons))
        .context("compute established franchises")?;
    info!(
        franchises = established.len(),
        min_seasons = established.min_seasons,
        "established franchises computed (not applied)"
    );

    // =========================================================================
    // Stage 4: Join
    // =========================================================================
    let join_start = Instant::now();
    let joined = info_span!("join")
        .in_scope(|| merge_batting_teams(&normalized.batting, &normalized.teams, &options.join))
        .context("join batting and team tables")?;
    log_warnings("join", &joined.warnings);
    info!(
        rows = joined.merged.height(),
        collisions = joined.collisions.len(),
        duration_ms = join_start.elapsed().as_millis(),
        "join complete"
    );

    // =========================================================================
    // Stage 5: Aggregate
    // =========================================================================
    let aggregate_start = Instant::now();
    let aggregated =
        info_span!("aggregate").in_scope(|| aggregate(&joined.merged, options, lookup))?;
    log_warnings("aggregate", &aggregated.warnings);
    info!(
        yearly_rows = aggregated.yearly.height(),
        efficiency_rows = aggregated.efficiency.height(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregate complete"
    );

    let counts = StageCounts {
        batting_rows: sources.batting.data.height(),
        team_rows: sources.teams.data.height(),
        merged_rows: joined.merged.height(),
        yearly_rows: aggregated.yearly.height(),
        efficiency_rows: aggregated.efficiency.height(),
        established_franchises: established.len(),
        established_team_rows: established.teams.height(),
    };

    let mut warnings = normalized.warnings;
    warnings.extend(joined.warnings);
    warnings.extend(aggregated.warnings);

    Ok(PipelineOutput {
        inputs: vec![sources.batting.fingerprint, sources.teams.fingerprint],
        options: options.clone(),
        counts,
        collisions: joined.collisions,
        franchises: FranchiseReport {
            min_seasons: established.min_seasons,
            team_rows: established.teams.height(),
            franchises: established.franchises,
        },
        yearly: aggregated.yearly,
        efficiency: aggregated.efficiency,
        quadrant: aggregated.quadrant,
        warnings,
    })
}
