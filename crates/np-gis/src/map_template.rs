//! Map template: the list of layers making up the GIS project

use crate::error::{GisError, GisResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One layer entry of the map template
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerSource {
    /// Name the layer is queried by
    pub name: String,
    /// GeoJSON file, relative to the template's directory
    pub path: PathBuf,
}

/// Parsed map template
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapTemplate {
    pub layers: Vec<LayerSource>,
}

impl MapTemplate {
    /// Read a map template and resolve its layer paths against the template's directory
    pub fn load(path: &Path) -> GisResult<Self> {
        let err = |message: String| GisError::MapTemplate {
            path: path.display().to_string(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
        let mut template: MapTemplate =
            serde_yaml::from_str(&content).map_err(|e| err(e.to_string()))?;

        let mut seen = HashSet::new();
        for layer in &template.layers {
            if !seen.insert(layer.name.as_str()) {
                return Err(err(format!("duplicate layer '{}'", layer.name)));
            }
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for layer in &mut template.layers {
            if layer.path.is_relative() {
                layer.path = base.join(&layer.path);
            }
        }

        Ok(template)
    }
}
