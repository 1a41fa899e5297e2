//! Recoverable data-quality conditions raised while computing metrics.
//!
//! None of these abort a run. Stages collect them and the caller decides
//! whether to log, print or persist them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recoverable condition found during a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComputationWarning {
    /// A ratio had a zero (or missing) denominator and was left missing.
    ZeroDenominator {
        table: String,
        metric: String,
        rows: usize,
    },
    /// A join key occurred more than once in a source table.
    DuplicateKeys { table: String, keys: usize },
    /// A team had no entry in a display lookup table.
    MissingLookup { team: String, field: String },
}

impl ComputationWarning {
    pub fn zero_denominator(table: &str, metric: &str, rows: usize) -> Self {
        Self::ZeroDenominator {
            table: table.to_string(),
            metric: metric.to_string(),
            rows,
        }
    }

    pub fn duplicate_keys(table: &str, keys: usize) -> Self {
        Self::DuplicateKeys {
            table: table.to_string(),
            keys,
        }
    }

    pub fn missing_lookup(team: &str, field: &str) -> Self {
        Self::MissingLookup {
            team: team.to_string(),
            field: field.to_string(),
        }
    }
}

impl fmt::Display for ComputationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator {
                table,
                metric,
                rows,
            } => write!(f, "{table}: {rows} row(s) with undefined {metric}"),
            Self::DuplicateKeys { table, keys } => {
                write!(f, "{table}: {keys} repeated join key(s)")
            }
            Self::MissingLookup { team, field } => {
                write!(f, "no {field} entry for team '{team}'")
            }
        }
    }
}
