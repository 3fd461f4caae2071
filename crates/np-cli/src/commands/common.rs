//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use np_core::Project;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load the project named by the global arguments
pub(crate) fn load_project(global: &GlobalArgs) -> Result<Project> {
    let dir = Path::new(&global.project_dir);
    let config = global.config.as_deref().map(Path::new);
    Project::load(dir, config)
        .with_context(|| format!("Failed to load project at {}", dir.display()))
}

/// Split a comma-separated `--nhoods` value; `None` means every neighborhood
pub(crate) fn parse_nhoods(arg: &Option<String>) -> Vec<String> {
    arg.as_deref()
        .map(|list| {
            list.split(',')
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nhoods() {
        assert!(parse_nhoods(&None).is_empty());
        assert_eq!(
            parse_nhoods(&Some("Rattlesnake, Lower Hellgate,".to_string())),
            vec!["Rattlesnake", "Lower Hellgate"]
        );
    }
}
