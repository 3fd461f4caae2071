//! Run environment: everything loaded once before collection starts

use crate::collect::Collector;
use crate::error::{PipelineError, PipelineResult};
use crate::reporter::{run_step, Reporter};
use np_core::{dedup_names, NeighborhoodName, Project};
use np_db::ReferenceTables;
use np_gis::{GeoJsonEngine, SpatialEngine};
use np_jinja::ProfileTemplate;
use serde_json::Value;

/// Loaded resources for one run
pub struct ProfileEnv {
    pub project: Project,
    pub template: ProfileTemplate,
    pub engine: GeoJsonEngine,
    pub references: ReferenceTables,
    /// Deduplicated neighborhood names, sorted
    pub names: Vec<NeighborhoodName>,
}

impl ProfileEnv {
    /// Check the project and load templates, layers, names and spreadsheets.
    ///
    /// Any failure aborts before a single output file is written.
    pub fn load(project: Project, reporter: &dyn Reporter) -> PipelineResult<Self> {
        run_step(reporter, "Checking environments...", || {
            project.check_environment().map_err(PipelineError::from)
        })?;

        let template = run_step(reporter, "Loading templates...", || {
            ProfileTemplate::load(&project.paths.templates, &project.config.profile_template)
                .map_err(PipelineError::from)
        })?;

        let engine = run_step(reporter, "Loading map layers...", || -> PipelineResult<_> {
            let engine = GeoJsonEngine::from_map_template(&project.paths.map_template)?;
            for layer in project.config.layers.required() {
                if !engine.has_layer(layer) {
                    return Err(PipelineError::MissingLayer(layer.to_string()));
                }
            }
            Ok(engine)
        })?;

        let names = run_step(reporter, "Loading neighborhood names...", || -> PipelineResult<_> {
            let values = engine.field_values(
                &project.config.layers.neighborhoods,
                &project.config.fields.name,
            )?;
            let raw = values.into_iter().filter_map(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
            dedup_names(raw).map_err(PipelineError::from)
        })?;

        let references = run_step(reporter, "Loading other datasets...", || {
            ReferenceTables::load(&project.paths.ward_reps, &project.paths.guide_docs)
                .map_err(PipelineError::from)
        })?;

        log::debug!("{} neighborhoods in '{}'", names.len(), project.config.name);

        Ok(Self {
            project,
            template,
            engine,
            references,
            names,
        })
    }

    /// Collector reading from this environment
    pub fn collector(&self) -> Collector<'_, GeoJsonEngine> {
        Collector::new(
            &self.engine,
            &self.project.config,
            &self.references,
            &self.project.paths.descriptions,
        )
    }

    /// Restrict the run to `filter`, or every neighborhood when it is empty.
    ///
    /// The result keeps the sorted order of [`ProfileEnv::names`].
    pub fn select_names(&self, filter: &[String]) -> PipelineResult<Vec<NeighborhoodName>> {
        if filter.is_empty() {
            return Ok(self.names.clone());
        }
        if let Some(unknown) = filter
            .iter()
            .find(|wanted| !self.names.iter().any(|n| n == wanted.trim()))
        {
            return Err(PipelineError::UnknownNeighborhood(unknown.trim().to_string()));
        }
        Ok(self
            .names
            .iter()
            .filter(|n| filter.iter().any(|wanted| *n == wanted.trim()))
            .cloned()
            .collect())
    }

    /// Collect every record before any is rendered, so a failing
    /// neighborhood leaves no partial profile set behind.
    pub fn collect_records(
        &self,
        names: &[NeighborhoodName],
        reporter: &dyn Reporter,
    ) -> PipelineResult<Vec<np_core::ProfileRecord>> {
        let collector = self.collector();
        run_step(reporter, "Beginning profile generation...", || {
            names
                .iter()
                .map(|name| {
                    reporter.item(name.as_str());
                    collector.collect(name)
                })
                .collect()
        })
    }
}
