//! Writing a run's tables and JSON documents to the output directory.
//!
//! Every file is a pure function of the pipeline output, so identical inputs
//! give byte-identical files. Nothing time-dependent is written.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;

use mlb_ingest::SourceFingerprint;
use mlb_model::{ComputationWarning, PipelineOptions};
use mlb_transform::{Collision, QuadrantSummary};

use crate::pipeline::{FranchiseReport, PipelineOutput};
use crate::types::StageCounts;

pub const YEARLY_SUMMARY_FILE: &str = "yearly_batting_summary.csv";
pub const TEAM_EFFICIENCY_FILE: &str = "team_efficiency_summary.csv";
pub const QUADRANT_SUMMARY_FILE: &str = "quadrant_summary.json";
pub const RUN_MANIFEST_FILE: &str = "run_manifest.json";

const MANIFEST_SCHEMA: &str = "mlb-trends.run-manifest";
const QUADRANT_SCHEMA: &str = "mlb-trends.quadrant-summary";
const SCHEMA_VERSION: u32 = 1;

/// Locations of the files a run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub yearly: PathBuf,
    pub efficiency: PathBuf,
    pub quadrant: PathBuf,
    pub manifest: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            yearly: dir.join(YEARLY_SUMMARY_FILE),
            efficiency: dir.join(TEAM_EFFICIENCY_FILE),
            quadrant: dir.join(QUADRANT_SUMMARY_FILE),
            manifest: dir.join(RUN_MANIFEST_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            self.yearly.as_path(),
            self.efficiency.as_path(),
            self.quadrant.as_path(),
            self.manifest.as_path(),
        ]
    }
}

#[derive(Serialize)]
struct QuadrantDocument<'a> {
    schema: &'static str,
    schema_version: u32,
    #[serde(flatten)]
    summary: &'a QuadrantSummary,
}

#[derive(Serialize)]
struct RunManifest<'a> {
    schema: &'static str,
    schema_version: u32,
    inputs: &'a [SourceFingerprint],
    options: &'a PipelineOptions,
    rows: &'a StageCounts,
    collisions: &'a [Collision],
    established_franchises: &'a FranchiseReport,
    warnings: &'a [ComputationWarning],
    outputs: [&'static str; 3],
}

fn write_csv(path: &Path, df: &DataFrame) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)
        .with_context(|| format!("serialize {}", path.display()))?;
    std::fs::write(path, format!("{json}\n")).with_context(|| format!("write {}", path.display()))
}

/// Write both summary tables, the quadrant summary and the run manifest.
pub fn write_outputs(output_dir: &Path, output: &PipelineOutput) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let paths = OutputPaths::in_dir(output_dir);

    write_csv(&paths.yearly, &output.yearly)?;
    write_csv(&paths.efficiency, &output.efficiency)?;
    write_json(
        &paths.quadrant,
        &QuadrantDocument {
            schema: QUADRANT_SCHEMA,
            schema_version: SCHEMA_VERSION,
            summary: &output.quadrant,
        },
    )?;
    write_json(
        &paths.manifest,
        &RunManifest {
            schema: MANIFEST_SCHEMA,
            schema_version: SCHEMA_VERSION,
            inputs: &output.inputs,
            options: &output.options,
            rows: &output.counts,
            collisions: &output.collisions,
            established_franchises: &output.franchises,
            warnings: &output.warnings,
            outputs: [
                YEARLY_SUMMARY_FILE,
                TEAM_EFFICIENCY_FILE,
                QUADRANT_SUMMARY_FILE,
            ],
        },
    )?;

    tracing::info!(output_dir = %output_dir.display(), files = paths.all().len(), "outputs written");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn paths_live_in_the_output_dir() {
        let paths = OutputPaths::in_dir(Path::new("out"));
        assert_eq!(paths.yearly, Path::new("out/yearly_batting_summary.csv"));
        assert_eq!(paths.manifest, Path::new("out/run_manifest.json"));
        assert_eq!(paths.all().len(), 4);
    }

    #[test]
    fn csv_writes_nulls_as_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        let frame = df!(
            "year" => [2000i64, 2001],
            "batting_average" => [Some(0.25), None]
        )
        .unwrap();

        write_csv(&path, &frame).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(written, @r"
        year,batting_average
        2000,0.25
        2001,
        ");
    }
}
