//! Error types for np-core

use thiserror::Error;

/// Core error type for nhood-profiles
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: A required input path is missing
    #[error("[E004] Required path does not exist: {path}")]
    MissingPath { path: String },

    /// E005: Profiles directory already holds PDFs
    #[error("[E005] PDFs exist in the profiles directory ({path}); move or delete them before running")]
    PdfsExist { path: String },

    /// E006: IO error with file path context
    #[error("[E006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E007: Two neighborhoods map to the same output file
    #[error("[E007] Neighborhoods '{first}' and '{second}' both map to file name '{file_stem}'")]
    DuplicateName {
        first: String,
        second: String,
        file_stem: String,
    },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
