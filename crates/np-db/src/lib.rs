//! np-db - Reference spreadsheet layer for nhood-profiles
//!
//! Spreadsheets are read into an in-memory DuckDB with `read_csv_auto` and
//! queried per neighborhood. The same connection writes the short-URL table.

pub mod duckdb;
pub mod error;
pub mod references;

pub use crate::duckdb::SheetDb;
pub use error::{DbError, DbResult};
pub use references::{ReferenceTables, GUIDE_DOCS_TABLE, WARD_REPS_TABLE};
