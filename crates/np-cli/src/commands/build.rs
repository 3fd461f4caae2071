//! Build command implementation
//!
//! Loads the run environment, collects every requested neighborhood,
//! writes the HTML profiles and converts them to PDF.

use anyhow::{Context, Result};
use np_pipeline::{build_profiles, export_all, CommandConverter, ProfileEnv};

use crate::cli::{BuildArgs, GlobalArgs};
use crate::commands::common::{load_project, parse_nhoods};
use crate::status::StatusLine;

/// Execute the build command
pub(crate) fn execute(args: &BuildArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    println!("{}\n", project.config.name);

    let status = StatusLine::new();
    let env = ProfileEnv::load(project, &status)?;
    let names = env.select_names(&parse_nhoods(&args.nhoods))?;

    // Templates and the converter resolve relative assets (stylesheets,
    // images) from the templates directory. Every project path is absolute.
    let templates = &env.project.paths.templates;
    std::env::set_current_dir(templates)
        .with_context(|| format!("Failed to enter {}", templates.display()))?;

    let written = build_profiles(&env, &names, &status)?;

    if !args.skip_pdf {
        let converter = CommandConverter::from_config(&env.project.config.pdf);
        export_all(&env.project.paths.profiles, &converter, &status)?;
    }
    drop(status);

    println!(
        "\nComplete. {} profiles in {}",
        written.len(),
        env.project.paths.profiles.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
