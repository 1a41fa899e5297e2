//! Loading both source tables of a run.

use std::path::Path;
use std::time::Instant;

use mlb_model::columns::{BATTING_REQUIRED, TEAMS_REQUIRED};
use polars::prelude::DataFrame;
use tracing::info;

use crate::error::Result;
use crate::fingerprint::{SourceFingerprint, fingerprint_file};
use crate::reader::read_csv_table;

/// A loaded source table together with the identity of the file it came from.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub data: DataFrame,
    pub fingerprint: SourceFingerprint,
}

/// The per-player batting table and the per-team season table.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub batting: SourceTable,
    pub teams: SourceTable,
}

/// Loads a single table, checking `required` columns and fingerprinting it.
pub fn load_source(path: &Path, required: &[&str]) -> Result<SourceTable> {
    let start = Instant::now();
    let data = read_csv_table(path, required)?;
    let fingerprint = fingerprint_file(path)?;
    info!(
        path = %path.display(),
        rows = data.height(),
        columns = data.width(),
        duration_ms = start.elapsed().as_millis(),
        "loaded source table"
    );
    Ok(SourceTable { data, fingerprint })
}

/// Loads the batting and team tables with their required column sets.
///
/// Either failure aborts the load; the batting table is read first.
pub fn load_sources(batting_path: &Path, teams_path: &Path) -> Result<SourceTables> {
    let batting = load_source(batting_path, BATTING_REQUIRED)?;
    let teams = load_source(teams_path, TEAMS_REQUIRED)?;
    Ok(SourceTables { batting, teams })
}
