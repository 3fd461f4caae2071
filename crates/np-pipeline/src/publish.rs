//! Short URLs for published profiles

use crate::error::{PipelineError, PipelineResult};
use crate::export::list_files;
use crate::reporter::{run_step, Reporter};
use np_db::SheetDb;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Header of the short-URL spreadsheet
pub const SHORT_URL_HEADER: (&str, &str) = ("Nhood", "URL");

/// Turns a long public URL into a short one
pub trait UrlShortener {
    fn shorten(&self, url: &str) -> PipelineResult<String>;
}

/// TinyURL-style endpoint: `GET {api}{url}` answers with the short URL as
/// plain text.
pub struct TinyUrl {
    api: String,
    client: reqwest::blocking::Client,
}

impl TinyUrl {
    pub fn new(api: impl Into<String>) -> PipelineResult<Self> {
        let api = api.into();
        // Requests wait as long as the service takes
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| PipelineError::Shortener {
                url: api.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { api, client })
    }
}

impl UrlShortener for TinyUrl {
    fn shorten(&self, url: &str) -> PipelineResult<String> {
        let request = format!("{}{}", self.api, url);
        let fail = |message: String| PipelineError::Shortener {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(&request)
            .send()
            .map_err(|e| fail(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP {}", status)));
        }
        let body = response.text().map_err(|e| fail(e.to_string()))?;
        Ok(body.trim().to_string())
    }
}

/// One published file and its short URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortUrl {
    /// File name on the share
    pub name: String,
    pub url: String,
}

/// Public URL of `file_name` under `base_url`
pub fn public_url(base_url: &str, file_name: &str) -> String {
    let separator = if base_url.ends_with('/') { "" } else { "/" };
    format!("{}{}{}", base_url, separator, file_name.replace(' ', "%20"))
}

/// Shorten the public URL of every file on the share, sorted by file name.
///
/// One request per file, no retries; the first failure aborts the run.
pub fn publish_urls(
    share_dir: &Path,
    base_url: &str,
    shortener: &dyn UrlShortener,
    reporter: &dyn Reporter,
) -> PipelineResult<Vec<ShortUrl>> {
    run_step(reporter, "Shortening URLs...", || {
        let mut urls = Vec::new();
        for path in list_files(share_dir)? {
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            reporter.item(&name);
            let url = shortener.shorten(&public_url(base_url, &name))?;
            urls.push(ShortUrl { name, url });
        }
        urls.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(urls)
    })
}

/// Write the `Nhood`/`URL` spreadsheet
pub fn write_short_urls(path: &Path, urls: &[ShortUrl]) -> PipelineResult<()> {
    let rows: Vec<(String, String)> = urls
        .iter()
        .map(|u| (u.name.clone(), u.url.clone()))
        .collect();
    let db = SheetDb::in_memory()?;
    db.write_pairs(path, SHORT_URL_HEADER, &rows)?;
    log::info!("Wrote {} short URLs to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "publish_test.rs"]
mod tests;
