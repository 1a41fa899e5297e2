//! Raw table loading for the batting trends pipeline.
//!
//! This crate reads the Lahman CSV exports into Polars DataFrames.
//!
//! # Features
//!
//! - **CSV Loading**: Read a delimited file keeping every source column
//! - **Schema Checks**: Fail fast when a required column is absent
//! - **Fingerprints**: SHA-256 identity of each input for the run manifest
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mlb_ingest::load_sources;
//!
//! let sources = load_sources(
//!     Path::new("lahman_1871-2023_csv/Batting.csv"),
//!     Path::new("lahman_1871-2023_csv/Teams.csv"),
//! )?;
//! println!("{} batting rows", sources.batting.data.height());
//! ```

mod error;
mod fingerprint;
mod reader;
mod schema;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_csv_table, validate_encoding};
pub use schema::{read_csv_headers, require_columns};

// === Input Identity ===
pub use fingerprint::{SourceFingerprint, fingerprint_file};

// === Source Loading ===
pub use sources::{SourceTable, SourceTables, load_source, load_sources};
