//! Error types for the transformation stages.

use polars::prelude::{DataFrame, PolarsError};
use thiserror::Error;

/// Errors raised by a transformation stage.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A stage input lacks a column the stage reads.
    #[error("required column '{column}' not found in {table} table")]
    MissingColumn { column: String, table: &'static str },

    /// Wrapped Polars failure.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Fails on the first name in `columns` that `df` does not carry.
pub(crate) fn require_columns(df: &DataFrame, table: &'static str, columns: &[&str]) -> Result<()> {
    match columns
        .iter()
        .find(|name| df.get_column_index(name).is_none())
    {
        Some(name) => Err(TransformError::MissingColumn {
            column: (*name).to_string(),
            table,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn missing_column_names_table() {
        let frame = df!("yearID" => [2000i64]).unwrap();
        let err = require_columns(&frame, "teams", &["yearID", "RA"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required column 'RA' not found in teams table"
        );
        assert!(require_columns(&frame, "teams", &["yearID"]).is_ok());
    }
}
