//! Error types for np-pipeline

use np_core::CoreError;
use np_db::DbError;
use np_gis::GisError;
use np_jinja::JinjaError;
use thiserror::Error;

/// Pipeline errors. Every variant is fatal to the run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Gis(#[from] GisError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Jinja(#[from] JinjaError),

    /// Converter ran but did not produce a PDF (P001)
    #[error("[P001] Failed to convert {path} to PDF: {message}")]
    Conversion { path: String, message: String },

    /// Converter program could not be started (P002)
    #[error("[P002] Failed to start converter '{program}': {source}")]
    ConverterSpawn {
        program: String,
        source: std::io::Error,
    },

    /// Shortening request failed (P003)
    #[error("[P003] URL shortener request for {url} failed: {message}")]
    Shortener { url: String, message: String },

    /// IO error with file path context (P004)
    #[error("[P004] IO error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Map template lacks a layer the collector reads (P005)
    #[error("[P005] Layer '{0}' is missing from the map template")]
    MissingLayer(String),

    /// Requested neighborhood is not in the neighborhoods layer (P006)
    #[error("[P006] Unknown neighborhood '{0}'")]
    UnknownNeighborhood(String),

    /// Collection failed for one neighborhood (P007)
    #[error("[P007] Failed to collect '{name}': {source}")]
    Collect {
        name: String,
        source: Box<PipelineError>,
    },
}

/// Result type alias for PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
