//! Shorten command implementation

use anyhow::{Context, Result};
use np_pipeline::{publish_urls, write_short_urls, TinyUrl};
use std::path::Path;

use crate::cli::{GlobalArgs, ShortenArgs};
use crate::commands::common::load_project;
use crate::status::StatusLine;

/// Execute the shorten command
pub(crate) fn execute(args: &ShortenArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let settings = &project.config.shortener;

    let share_dir = args
        .share_dir
        .as_deref()
        .or(settings.share_dir.as_deref())
        .context("No share directory: pass --share-dir or set shortener.share_dir")?;
    let base_url = args
        .base_url
        .as_deref()
        .or(settings.base_url.as_deref())
        .context("No public URL: pass --base-url or set shortener.base_url")?;
    let output = project
        .root
        .join(args.output.as_deref().unwrap_or(&settings.output));

    let status = StatusLine::new();
    let shortener = TinyUrl::new(settings.api.clone())?;
    let urls = publish_urls(
        &project.root.join(Path::new(share_dir)),
        base_url,
        &shortener,
        &status,
    )?;
    write_short_urls(&output, &urls)?;
    drop(status);

    println!("Wrote {} short URLs to {}", urls.len(), output.display());
    Ok(())
}
