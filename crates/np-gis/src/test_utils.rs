//! Feature builders for tests against `GeoJsonEngine`

use geojson::FeatureCollection;
use serde_json::{json, Value};

/// Axis-aligned square polygon feature
pub fn square(x0: f64, y0: f64, x1: f64, y1: f64, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]]
        },
        "properties": properties
    })
}

/// Point feature
pub fn point(x: f64, y: f64, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [x, y] },
        "properties": properties
    })
}

/// Two-point line feature
pub fn line(from: (f64, f64), to: (f64, f64), properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": [[from.0, from.1], [to.0, to.1]]
        },
        "properties": properties
    })
}

/// Wrap features into a collection
pub fn collection(features: Vec<Value>) -> FeatureCollection {
    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": features
    }))
    .expect("valid feature collection")
}
