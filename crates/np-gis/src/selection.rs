//! Scoped selections
//!
//! A [`Selection`] owns one layer's selection for as long as it lives and
//! clears it on drop, on error paths included.

use crate::engine::{SpatialEngine, SpatialRelation};
use crate::error::{GisError, GisResult};
use serde_json::Value;
use std::collections::BTreeSet;

/// Active selection on one layer, cleared when dropped
pub struct Selection<'e, E: SpatialEngine + ?Sized> {
    engine: &'e E,
    layer: String,
    count: usize,
}

impl<'e, E: SpatialEngine + ?Sized> Selection<'e, E> {
    /// Select features of `layer` whose `field` equals `value`
    pub fn by_attribute(engine: &'e E, layer: &str, field: &str, value: &str) -> GisResult<Self> {
        let count = settle(engine, layer, engine.select_by_attribute(layer, field, value))?;
        Ok(Self {
            engine,
            layer: layer.to_string(),
            count,
        })
    }

    /// Select features of `layer` related to the current features of `selecting`
    pub fn by_location(
        engine: &'e E,
        layer: &str,
        relation: SpatialRelation,
        selecting: &str,
    ) -> GisResult<Self> {
        let count = settle(
            engine,
            layer,
            engine.select_by_location(layer, relation, selecting),
        )?;
        Ok(Self {
            engine,
            layer: layer.to_string(),
            count,
        })
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Number of selected features
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Raw values of `field` over the selected features
    pub fn values(&self, field: &str) -> GisResult<Vec<Value>> {
        self.engine.field_values(&self.layer, field)
    }

    /// Value of `field` on the first selected feature
    pub fn first_value(&self, field: &str) -> GisResult<Option<Value>> {
        Ok(self.values(field)?.into_iter().next())
    }

    /// Distinct non-empty values of `field`, sorted
    pub fn distinct_names(&self, field: &str) -> GisResult<Vec<String>> {
        let names: BTreeSet<String> = self
            .values(field)?
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Sum of a numeric field over the selected features
    pub fn sum(&self, field: &str) -> GisResult<f64> {
        self.values(field)?
            .iter()
            .map(|v| {
                let number = match v {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                };
                number.ok_or_else(|| GisError::NotNumeric {
                    layer: self.layer.clone(),
                    field: field.to_string(),
                    value: v.to_string(),
                })
            })
            .sum()
    }
}

impl<E: SpatialEngine + ?Sized> Drop for Selection<'_, E> {
    fn drop(&mut self) {
        if let Err(e) = self.engine.clear_selection(&self.layer) {
            log::warn!("Failed to clear selection on '{}': {}", self.layer, e);
        }
    }
}

/// A failed select may have left partial state behind; clear it before
/// handing the error back.
fn settle<E: SpatialEngine + ?Sized>(
    engine: &E,
    layer: &str,
    result: GisResult<usize>,
) -> GisResult<usize> {
    result.inspect_err(|_| {
        let _ = engine.clear_selection(layer);
    })
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
