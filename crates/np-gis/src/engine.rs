//! Spatial engine trait definition

use crate::error::GisResult;
use serde_json::Value;

/// How features of the target layer relate to the selecting layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialRelation {
    /// Target geometry touches or overlaps a selecting geometry
    Intersect,
    /// Target geometry lies entirely inside a selecting geometry
    Within,
    /// Target geometry's centroid lies inside a selecting geometry
    HaveTheirCenterIn,
}

impl std::fmt::Display for SpatialRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpatialRelation::Intersect => write!(f, "INTERSECT"),
            SpatialRelation::Within => write!(f, "WITHIN"),
            SpatialRelation::HaveTheirCenterIn => write!(f, "HAVE_THEIR_CENTER_IN"),
        }
    }
}

/// Spatial query abstraction over a loaded map.
///
/// Every layer carries an ambient selection. Reads observe the selected
/// features of a layer, or all of them when nothing is selected, and a
/// location query uses the current selection of the selecting layer as its
/// filter. Callers should hold selections through [`crate::Selection`] so
/// they are always cleared.
pub trait SpatialEngine {
    /// Layer names in map order
    fn layer_names(&self) -> Vec<String>;

    /// Whether the layer table has this layer
    fn has_layer(&self, layer: &str) -> bool {
        self.layer_names().iter().any(|l| l == layer)
    }

    /// Replace the layer's selection with features whose `field` equals `value`.
    /// Returns the number of selected features.
    fn select_by_attribute(&self, layer: &str, field: &str, value: &str) -> GisResult<usize>;

    /// Replace the layer's selection with features related to the selecting
    /// layer's current features. Returns the number of selected features.
    fn select_by_location(
        &self,
        layer: &str,
        relation: SpatialRelation,
        selecting: &str,
    ) -> GisResult<usize>;

    /// Drop the layer's selection
    fn clear_selection(&self, layer: &str) -> GisResult<()>;

    /// Values of `field` for the layer's current features, in feature order.
    /// Features without the attribute yield `Value::Null`.
    fn field_values(&self, layer: &str, field: &str) -> GisResult<Vec<Value>>;
}
