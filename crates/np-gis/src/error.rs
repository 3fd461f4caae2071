//! Error types for np-gis

use thiserror::Error;

/// Spatial query errors
#[derive(Error, Debug)]
pub enum GisError {
    /// Layer not in the layer table (G001)
    #[error("[G001] Layer not found: {0}")]
    LayerNotFound(String),

    /// Layer file could not be read or parsed (G002)
    #[error("[G002] Failed to load layer '{layer}' from {path}: {message}")]
    LayerLoad {
        layer: String,
        path: String,
        message: String,
    },

    /// Field absent from every feature of a layer (G003)
    #[error("[G003] Field '{field}' not found in layer '{layer}'")]
    FieldNotFound { layer: String, field: String },

    /// Field value cannot be summed (G004)
    #[error("[G004] Field '{field}' in layer '{layer}' has non-numeric value {value}")]
    NotNumeric {
        layer: String,
        field: String,
        value: String,
    },

    /// Attribute selection matched nothing (G005)
    #[error("[G005] No feature in layer '{layer}' has {field} = '{value}'")]
    NoMatch {
        layer: String,
        field: String,
        value: String,
    },

    /// Map template unreadable (G006)
    #[error("[G006] Invalid map template {path}: {message}")]
    MapTemplate { path: String, message: String },
}

/// Result type alias for GisError
pub type GisResult<T> = Result<T, GisError>;
