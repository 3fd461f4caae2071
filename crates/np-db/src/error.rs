//! Error types for np-db

use thiserror::Error;

/// Spreadsheet operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Spreadsheet loading error (D003)
    #[error("[D003] Failed to load spreadsheet {path}: {message}")]
    LoadError { path: String, message: String },

    /// Spreadsheet is missing a required column (D004)
    #[error("[D004] Spreadsheet {path} is missing column '{column}'")]
    MissingColumn { path: String, column: String },

    /// Spreadsheet writing error (D005)
    #[error("[D005] Failed to write spreadsheet {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        DbError::ExecutionError(err.to_string())
    }
}
