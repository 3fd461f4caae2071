//! np-gis - Spatial query layer for nhood-profiles
//!
//! This crate provides the `SpatialEngine` trait, the scoped `Selection`
//! guard that keeps the engine's per-layer selection state from leaking
//! between queries, and `GeoJsonEngine`, an implementation over GeoJSON
//! layers listed in a map template.

pub mod engine;
pub mod error;
pub mod geojson_engine;
pub mod map_template;
pub mod selection;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use engine::{SpatialEngine, SpatialRelation};
pub use error::{GisError, GisResult};
pub use geojson_engine::GeoJsonEngine;
pub use map_template::{LayerSource, MapTemplate};
pub use selection::Selection;
