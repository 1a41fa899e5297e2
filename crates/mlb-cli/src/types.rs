use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::output::OutputPaths;
use crate::pipeline::PipelineOutput;

/// Row counts after each stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    pub batting_rows: usize,
    pub team_rows: usize,
    pub merged_rows: usize,
    pub yearly_rows: usize,
    pub efficiency_rows: usize,
    pub established_franchises: usize,
    pub established_team_rows: usize,
}

/// Everything the terminal summary shows for one `run` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub pipeline: PipelineOutput,
    /// `None` for a dry run.
    pub outputs: Option<OutputPaths>,
    pub run_date: DateTime<Local>,
}
