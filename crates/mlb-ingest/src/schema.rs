//! Header-row inspection and required-column checks.
//!
//! The header is read with the `csv` crate before the full Polars parse so a
//! missing column is reported without materializing the table.

use std::fs::File;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads the header row of a delimited file.
///
/// A leading UTF-8 BOM is stripped. Names are otherwise kept as written so
/// the check sees the same columns the Polars reader produces.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let headers: Vec<String> = record
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(headers)
}

/// Fails with [`IngestError::MissingColumn`] on the first required column
/// absent from `headers`.
pub fn require_columns(headers: &[String], required: &[&str], path: &Path) -> Result<()> {
    match required
        .iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        Some(column) => Err(IngestError::MissingColumn {
            column: (*column).to_string(),
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
