//! Project discovery and environment checks

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Absolute locations of everything a run reads or writes
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub templates: PathBuf,
    pub descriptions: PathBuf,
    pub profiles: PathBuf,
    pub ward_reps: PathBuf,
    pub guide_docs: PathBuf,
    pub profile_template: PathBuf,
    pub map_template: PathBuf,
}

impl ProjectPaths {
    fn resolve(root: &Path, config: &Config) -> Self {
        let templates = root.join(&config.paths.templates);
        Self {
            profile_template: templates.join(&config.profile_template),
            map_template: templates.join(&config.map_template),
            templates,
            descriptions: root.join(&config.paths.descriptions),
            profiles: root.join(&config.paths.profiles),
            ward_reps: root.join(&config.paths.ward_reps),
            guide_docs: root.join(&config.paths.guide_docs),
        }
    }
}

/// A neighborhood-profiles project: a root directory with its nhoods.yml
#[derive(Debug)]
pub struct Project {
    /// Project root directory
    pub root: PathBuf,

    /// Project configuration
    pub config: Config,

    /// Resolved input and output locations
    pub paths: ProjectPaths,
}

impl Project {
    /// Load a project from a directory, optionally with an explicit config file
    pub fn load(path: &Path, config_override: Option<&Path>) -> CoreResult<Self> {
        let root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        if !root.exists() {
            return Err(CoreError::MissingPath {
                path: root.display().to_string(),
            });
        }

        let config = match config_override {
            Some(file) => Config::load(&root.join(file))?,
            None => Config::load_from_dir(&root)?,
        };

        Ok(Self::from_config(root, config))
    }

    /// Build a project from an already parsed config
    pub fn from_config(root: PathBuf, config: Config) -> Self {
        let paths = ProjectPaths::resolve(&root, &config);
        Self {
            root,
            config,
            paths,
        }
    }

    /// Fail fast before any work: every input must exist and the profiles
    /// directory must not already hold PDFs.
    pub fn check_environment(&self) -> CoreResult<()> {
        let required = [
            &self.root,
            &self.paths.ward_reps,
            &self.paths.guide_docs,
            &self.paths.descriptions,
            &self.paths.profiles,
            &self.paths.templates,
            &self.paths.profile_template,
            &self.paths.map_template,
        ];
        for path in required {
            require_path(path)?;
        }
        ensure_no_pdfs(&self.paths.profiles)
    }

    /// Checks needed before converting the profiles directory on its own
    pub fn check_export(&self) -> CoreResult<()> {
        require_path(&self.paths.profiles)?;
        ensure_no_pdfs(&self.paths.profiles)
    }
}

fn require_path(path: &Path) -> CoreResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CoreError::MissingPath {
            path: path.display().to_string(),
        })
    }
}

/// Refuse to touch a directory that already holds converted profiles.
pub fn ensure_no_pdfs(dir: &Path) -> CoreResult<()> {
    let pattern = format!(
        "{}/*.pdf",
        glob::Pattern::escape(&dir.display().to_string())
    );
    let options = glob::MatchOptions {
        case_sensitive: false,
        ..Default::default()
    };
    let mut matches =
        glob::glob_with(&pattern, options).map_err(|e| CoreError::ConfigInvalid {
            message: format!("bad profiles path '{}': {}", dir.display(), e),
        })?;

    match matches.next() {
        Some(Ok(path)) => Err(CoreError::PdfsExist {
            path: path.display().to_string(),
        }),
        Some(Err(e)) => Err(CoreError::IoWithPath {
            path: e.path().display().to_string(),
            source: e.into(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
