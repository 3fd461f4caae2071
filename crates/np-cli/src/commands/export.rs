//! Export command implementation

use anyhow::Result;
use np_pipeline::{export_all, CommandConverter};

use crate::cli::{ExportArgs, GlobalArgs};
use crate::commands::common::load_project;
use crate::status::StatusLine;

/// Execute the export command
pub(crate) fn execute(_args: &ExportArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    project.check_export()?;

    let status = StatusLine::new();
    let converter = CommandConverter::from_config(&project.config.pdf);
    let written = export_all(&project.paths.profiles, &converter, &status)?;
    drop(status);

    println!("Converted {} files", written.len());
    Ok(())
}
