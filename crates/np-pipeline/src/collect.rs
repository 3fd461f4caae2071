//! Per-neighborhood data collection

use crate::error::{PipelineError, PipelineResult};
use chrono::Datelike;
use np_core::{round1, AssetCategory, Config, NeighborhoodName, ProfileRecord};
use np_db::ReferenceTables;
use np_gis::{GisError, Selection, SpatialEngine, SpatialRelation};
use serde_json::Value;
use std::path::Path;

/// Builds one [`ProfileRecord`] per neighborhood from the spatial layers,
/// the reference tables and the description files.
pub struct Collector<'a, E: SpatialEngine + ?Sized> {
    engine: &'a E,
    config: &'a Config,
    references: &'a ReferenceTables,
    descriptions: &'a Path,
    current_year: i32,
}

impl<'a, E: SpatialEngine + ?Sized> Collector<'a, E> {
    pub fn new(
        engine: &'a E,
        config: &'a Config,
        references: &'a ReferenceTables,
        descriptions: &'a Path,
    ) -> Self {
        Self {
            engine,
            config,
            references,
            descriptions,
            current_year: chrono::Local::now().year(),
        }
    }

    /// Pin the year printed on the profiles
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Collect everything printed on one neighborhood's profile
    pub fn collect(&self, name: &NeighborhoodName) -> PipelineResult<ProfileRecord> {
        self.collect_inner(name)
            .map_err(|e| PipelineError::Collect {
                name: name.to_string(),
                source: Box::new(e),
            })
    }

    fn collect_inner(&self, name: &NeighborhoodName) -> PipelineResult<ProfileRecord> {
        let layers = &self.config.layers;
        let fields = &self.config.fields;
        log::debug!("Collecting '{}'", name);

        // Both selections stay active until the record is complete; every
        // location query below reads through them.
        let nhood = self.select_one(&layers.neighborhoods, name)?;
        let _buffer = self.select_one(&layers.buffers, name)?;

        let date_est = nhood.first_value(&fields.year_created)?.and_then(value_text);
        let area = round1(nhood.sum(&fields.acres)?);

        let mut assets = AssetCategory::ALL.map(|category| (category, Vec::new()));
        for (category, names) in assets.iter_mut() {
            let (layer, field) = self.config.asset_source(*category);
            *names = self.near(layer)?.distinct_names(field)?;
            log::debug!("{}: {} {}", name, names.len(), category);
        }
        let [parks, schools, groceries, public_facilities, historic_sites] =
            assets.map(|(_, names)| names);

        let park_acres = round1(self.centered_in(&layers.parks)?.sum(&fields.park_acres)?);
        let trail_mi = round1(
            Selection::by_location(
                self.engine,
                &layers.trails,
                SpatialRelation::Within,
                &layers.neighborhoods,
            )?
            .sum(&fields.trail_miles)?,
        );

        let pop10 = whole(self.centered_in(&layers.blocks)?.sum(&fields.population)?);
        let pop_current = match &layers.permit_blocks {
            Some(permits) => {
                let added = self.centered_in(permits)?.sum(&fields.new_population)?;
                Some(pop10 + whole(added))
            }
            None => None,
        };

        Ok(ProfileRecord {
            description: self.description(name)?,
            council_reps: self.references.wards_for(name.as_str())?,
            guide_docs: self.references.guide_docs_for(name.as_str()),
            name: name.clone(),
            date_est,
            area,
            parks,
            park_acres,
            trail_mi,
            public_facilities,
            schools,
            groceries,
            historic_sites,
            current_year: self.current_year,
            pop10,
            pop_current,
            house10: None,
            house_current: None,
            new_dev: None,
        })
    }

    /// Select the feature named `name`; an empty selection is an error
    fn select_one(&self, layer: &str, name: &NeighborhoodName) -> PipelineResult<Selection<'a, E>> {
        let field = &self.config.fields.name;
        let selection = Selection::by_attribute(self.engine, layer, field, name.as_str())?;
        if selection.is_empty() {
            return Err(GisError::NoMatch {
                layer: layer.to_string(),
                field: field.to_string(),
                value: name.to_string(),
            }
            .into());
        }
        Ok(selection)
    }

    /// Features of `layer` touching the selected buffer
    fn near(&self, layer: &str) -> PipelineResult<Selection<'a, E>> {
        Ok(Selection::by_location(
            self.engine,
            layer,
            SpatialRelation::Intersect,
            &self.config.layers.buffers,
        )?)
    }

    /// Features of `layer` whose centroid is inside the selected neighborhood
    fn centered_in(&self, layer: &str) -> PipelineResult<Selection<'a, E>> {
        Ok(Selection::by_location(
            self.engine,
            layer,
            SpatialRelation::HaveTheirCenterIn,
            &self.config.layers.neighborhoods,
        )?)
    }

    /// First line of `<descriptions>/<stem>.txt`
    fn description(&self, name: &NeighborhoodName) -> PipelineResult<Option<String>> {
        let path = self.descriptions.join(format!("{}.txt", name.file_stem()));
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No description at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(PipelineError::io(&path, e)),
        };
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .next()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty()))
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Truncate a summed count to a whole number
fn whole(value: f64) -> u64 {
    value.trunc().max(0.0) as u64
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
