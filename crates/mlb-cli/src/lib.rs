//! Library side of the `mlb-trends` binary: logging, stage orchestration and
//! output writing.

pub mod logging;
pub mod output;
pub mod pipeline;
pub mod types;
