//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::schema::{read_csv_headers, require_columns};

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file into a Polars DataFrame.
///
/// All source columns are kept in file order and rows keep their file order.
/// Each name in `required` must appear in the header row, otherwise the read
/// fails with [`IngestError::MissingColumn`] before any data is parsed.
pub fn read_csv_table(path: &Path, required: &[&str]) -> Result<DataFrame> {
    validate_encoding(path)?;

    let headers = read_csv_headers(path)?;
    require_columns(&headers, required, path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        tracing::warn!(path = %path.display(), "table has a header row but no data rows");
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read table"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn read_csv_table_preserves_columns_and_rows() {
        let file = create_temp_csv("yearID,teamID,lgID,R\n1990,NYA,AL,5\n1989,BOS,AL,7\n");
        let df = read_csv_table(file.path(), &["yearID", "R"]).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.get_column_names_str(), vec!["yearID", "teamID", "lgID", "R"]);
        let years: Vec<Option<i64>> = df
            .column("yearID")
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(years, vec![Some(1990), Some(1989)]);
    }

    #[test]
    fn read_csv_table_missing_column() {
        let file = create_temp_csv("yearID,teamID\n1990,NYA\n");
        let result = read_csv_table(file.path(), &["yearID", "teamID", "RA"]);

        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "RA"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn read_csv_table_header_only() {
        let file = create_temp_csv("yearID,teamID\n");
        let df = read_csv_table(file.path(), &["yearID"]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn read_csv_table_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path(), &[]);
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'y', 0x00]).unwrap();
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFE, 0xFF, 0x00, b'y']).unwrap();
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
                ..
            })
        ));
    }

    #[test]
    fn validate_encoding_accepts_utf8_bom() {
        let file = create_temp_csv("\u{feff}yearID\n1990\n");
        assert!(validate_encoding(file.path()).is_ok());
    }

    #[test]
    fn read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/Teams.csv"), &[]);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
