//! Jinja environment for profile rendering

use crate::context::ProfileContext;
use crate::error::{JinjaError, JinjaResult};
use minijinja::{path_loader, AutoEscape, Environment, UndefinedBehavior};
use np_core::ProfileRecord;
use std::path::Path;

/// The loaded HTML report template
pub struct ProfileTemplate {
    env: Environment<'static>,
    name: String,
}

impl ProfileTemplate {
    /// Load `name` from the templates directory.
    ///
    /// Includes and extends inside the template resolve against the same
    /// directory.
    pub fn load(template_dir: &Path, name: &str) -> JinjaResult<Self> {
        let mut env = base_environment();
        env.set_loader(path_loader(template_dir));
        Self::finish(env, name)
    }

    /// Build a template from an in-memory source
    pub fn from_source(name: &str, source: &str) -> JinjaResult<Self> {
        let mut env = base_environment();
        env.add_template_owned(name.to_string(), source.to_string())
            .map_err(|e| JinjaError::TemplateLoad {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Self::finish(env, name)
    }

    fn finish(env: Environment<'static>, name: &str) -> JinjaResult<Self> {
        // Parse eagerly so a broken template fails before any query runs
        env.get_template(name)
            .map_err(|e| JinjaError::TemplateLoad {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        log::debug!("Loaded template '{name}'");
        Ok(Self {
            env,
            name: name.to_string(),
        })
    }

    /// Template name within the templates directory
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render a profile context to HTML
    pub fn render(&self, context: &ProfileContext) -> JinjaResult<String> {
        let template = self.env.get_template(&self.name)?;
        log::debug!(
            "Rendering '{}' for {}",
            self.name,
            context.neighborhood_name
        );
        Ok(template.render(context)?)
    }

    /// Render a record through its context
    pub fn render_record(&self, record: &ProfileRecord) -> JinjaResult<String> {
        self.render(&ProfileContext::from(record))
    }
}

/// Plain-text output (list cells carry `<br>` and anchors) and strict
/// undefined handling so a key missing from the context is an error.
fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;
