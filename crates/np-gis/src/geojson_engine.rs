//! GeoJSON-backed spatial engine

use crate::engine::{SpatialEngine, SpatialRelation};
use crate::error::{GisError, GisResult};
use crate::map_template::MapTemplate;
use geo::{Centroid, Geometry, Relate};
use geojson::{FeatureCollection, GeoJson};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

#[derive(Debug)]
struct Feature {
    geometry: Option<Geometry<f64>>,
    properties: Map<String, Value>,
}

#[derive(Debug)]
struct Layer {
    name: String,
    features: Vec<Feature>,
    /// Union of attribute names over all features
    fields: BTreeSet<String>,
    /// Selected feature indices; `None` means nothing is selected
    selection: RefCell<Option<Vec<usize>>>,
}

impl Layer {
    fn active(&self) -> Vec<usize> {
        match &*self.selection.borrow() {
            Some(indices) => indices.clone(),
            None => (0..self.features.len()).collect(),
        }
    }

    fn check_field(&self, field: &str) -> GisResult<()> {
        if self.features.is_empty() || self.fields.contains(field) {
            Ok(())
        } else {
            Err(GisError::FieldNotFound {
                layer: self.name.clone(),
                field: field.to_string(),
            })
        }
    }
}

/// Layer table over GeoJSON feature collections.
///
/// Selection state lives in `RefCell`s; the engine is meant for one thread
/// running one query at a time.
#[derive(Debug)]
pub struct GeoJsonEngine {
    layers: Vec<Layer>,
    index: HashMap<String, usize>,
}

impl GeoJsonEngine {
    /// Create an engine with no layers
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Load every layer listed in a map template
    pub fn from_map_template(path: &Path) -> GisResult<Self> {
        let template = MapTemplate::load(path)?;
        let mut engine = Self::new();
        for source in &template.layers {
            engine.add_layer_from_file(&source.name, &source.path)?;
        }
        Ok(engine)
    }

    /// Read a GeoJSON feature collection from disk and add it as a layer
    pub fn add_layer_from_file(&mut self, name: &str, path: &Path) -> GisResult<()> {
        let load_err = |message: String| GisError::LayerLoad {
            layer: name.to_string(),
            path: path.display().to_string(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let collection = content
            .parse::<GeoJson>()
            .and_then(FeatureCollection::try_from)
            .map_err(|e| load_err(e.to_string()))?;
        let layer = build_layer(name, collection).map_err(load_err)?;
        self.insert(layer);
        Ok(())
    }

    /// Add a layer from an in-memory feature collection, replacing any layer of that name
    pub fn add_layer(&mut self, name: &str, collection: FeatureCollection) -> GisResult<()> {
        let layer = build_layer(name, collection).map_err(|message| GisError::LayerLoad {
            layer: name.to_string(),
            path: "<memory>".to_string(),
            message,
        })?;
        self.insert(layer);
        Ok(())
    }

    fn insert(&mut self, layer: Layer) {
        log::debug!(
            "Loaded layer '{}' ({} features)",
            layer.name,
            layer.features.len()
        );
        match self.index.get(&layer.name) {
            Some(&i) => self.layers[i] = layer,
            None => {
                self.index.insert(layer.name.clone(), self.layers.len());
                self.layers.push(layer);
            }
        }
    }

    fn layer(&self, name: &str) -> GisResult<&Layer> {
        self.index
            .get(name)
            .map(|&i| &self.layers[i])
            .ok_or_else(|| GisError::LayerNotFound(name.to_string()))
    }
}

impl Default for GeoJsonEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn build_layer(name: &str, collection: FeatureCollection) -> Result<Layer, String> {
    let mut features = Vec::with_capacity(collection.features.len());
    let mut fields = BTreeSet::new();

    for feature in collection.features {
        let geometry = match feature.geometry {
            Some(g) => Some(Geometry::<f64>::try_from(g.value).map_err(|e| e.to_string())?),
            None => None,
        };
        let properties = feature.properties.unwrap_or_default();
        fields.extend(properties.keys().cloned());
        features.push(Feature {
            geometry,
            properties,
        });
    }

    Ok(Layer {
        name: name.to_string(),
        features,
        fields,
        selection: RefCell::new(None),
    })
}

/// Attribute value as compared by attribute selections
fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn related(target: &Geometry<f64>, relation: SpatialRelation, selecting: &Geometry<f64>) -> bool {
    match relation {
        SpatialRelation::Intersect => target.relate(selecting).is_intersects(),
        SpatialRelation::Within => target.relate(selecting).is_within(),
        SpatialRelation::HaveTheirCenterIn => match target.centroid() {
            Some(center) => Geometry::Point(center).relate(selecting).is_intersects(),
            None => false,
        },
    }
}

impl SpatialEngine for GeoJsonEngine {
    fn layer_names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.name.clone()).collect()
    }

    fn has_layer(&self, layer: &str) -> bool {
        self.index.contains_key(layer)
    }

    fn select_by_attribute(&self, layer: &str, field: &str, value: &str) -> GisResult<usize> {
        let target = self.layer(layer)?;
        target.check_field(field)?;

        let selected: Vec<usize> = target
            .features
            .iter()
            .enumerate()
            .filter(|(_, f)| {
                f.properties
                    .get(field)
                    .and_then(attribute_text)
                    .is_some_and(|v| v == value)
            })
            .map(|(i, _)| i)
            .collect();

        let count = selected.len();
        *target.selection.borrow_mut() = Some(selected);
        log::debug!("{layer}: {field} = '{value}' selected {count}");
        Ok(count)
    }

    fn select_by_location(
        &self,
        layer: &str,
        relation: SpatialRelation,
        selecting: &str,
    ) -> GisResult<usize> {
        let target = self.layer(layer)?;
        let source = self.layer(selecting)?;

        let filters: Vec<&Geometry<f64>> = source
            .active()
            .into_iter()
            .filter_map(|i| source.features[i].geometry.as_ref())
            .collect();

        let selected: Vec<usize> = target
            .features
            .iter()
            .enumerate()
            .filter(|(_, f)| match &f.geometry {
                Some(g) => filters.iter().any(|s| related(g, relation, s)),
                None => false,
            })
            .map(|(i, _)| i)
            .collect();

        let count = selected.len();
        *target.selection.borrow_mut() = Some(selected);
        log::debug!("{layer}: {relation} {selecting} selected {count}");
        Ok(count)
    }

    fn clear_selection(&self, layer: &str) -> GisResult<()> {
        *self.layer(layer)?.selection.borrow_mut() = None;
        Ok(())
    }

    fn field_values(&self, layer: &str, field: &str) -> GisResult<Vec<Value>> {
        let target = self.layer(layer)?;
        target.check_field(field)?;

        Ok(target
            .active()
            .into_iter()
            .map(|i| {
                target.features[i]
                    .properties
                    .get(field)
                    .cloned()
                    .unwrap_or(Value::Null)
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "geojson_engine_test.rs"]
mod tests;
