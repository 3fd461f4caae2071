//! np-core - Core library for nhood-profiles
//!
//! This crate provides the project configuration (`nhoods.yml`), the
//! neighborhood name newtype and its file-name sanitization, the typed
//! profile record, and the environment checks every pipeline stage relies on.

pub mod config;
pub mod error;
pub mod name;
pub mod project;
pub mod record;

pub use config::{
    AssetCategory, Config, FieldNames, LayerNames, PathsConfig, PdfConfig,
    ShortenerConfig,
};
pub use error::{CoreError, CoreResult};
pub use name::{dedup_names, sanitize, NeighborhoodName};
pub use project::{Project, ProjectPaths};
pub use record::{round1, GuideDoc, ProfileRecord};
