//! Polars column extraction and value formatting helpers.
//!
//! Stages build frames with the lazy API and read them back through these
//! helpers when a step is easier to express row by row (rounding, lookups,
//! rendering).

use polars::prelude::{DataFrame, DataType, PolarsResult};

/// Read a column as nullable `f64` values, casting numeric and string data.
///
/// Values that cannot be represented become `None`.
pub fn column_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let casted = df.column(name)?.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_iter().collect())
}

/// Read a column as nullable `i64` values.
pub fn column_i64(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<i64>>> {
    let casted = df.column(name)?.cast(&DataType::Int64)?;
    Ok(casted.i64()?.into_iter().collect())
}

/// Read a column as nullable owned strings.
pub fn column_str(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let casted = df.column(name)?.cast(&DataType::String)?;
    Ok(casted
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Format an optional float, rendering `None` as `-`.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}
