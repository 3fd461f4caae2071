//! Profile rendering

use crate::env::ProfileEnv;
use crate::error::{PipelineError, PipelineResult};
use crate::reporter::{run_step, Reporter};
use np_core::{NeighborhoodName, ProfileRecord};
use np_jinja::ProfileTemplate;
use std::path::{Path, PathBuf};

/// Render `record` into `<dir>/<stem>.html`, replacing any existing file
pub fn write_profile(
    dir: &Path,
    template: &ProfileTemplate,
    record: &ProfileRecord,
) -> PipelineResult<PathBuf> {
    let html = template.render_record(record)?;
    let path = dir.join(format!("{}.html", record.name.file_stem()));
    std::fs::write(&path, html).map_err(|e| PipelineError::io(&path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Collect every named neighborhood, then write their profiles.
///
/// Nothing is written unless every neighborhood collected cleanly.
pub fn build_profiles(
    env: &ProfileEnv,
    names: &[NeighborhoodName],
    reporter: &dyn Reporter,
) -> PipelineResult<Vec<PathBuf>> {
    let records = env.collect_records(names, reporter)?;
    let dir = &env.project.paths.profiles;
    run_step(reporter, "Writing profiles...", || {
        records
            .iter()
            .map(|record| {
                reporter.item(record.name.as_str());
                write_profile(dir, &env.template, record)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use np_core::GuideDoc;
    use tempfile::tempdir;

    fn record(name: &str) -> ProfileRecord {
        ProfileRecord {
            name: NeighborhoodName::new(name),
            description: None,
            date_est: Some("1976".to_string()),
            area: 211.0,
            council_reps: vec![],
            parks: vec!["Greenough Park".to_string()],
            park_acres: 0.0,
            trail_mi: 0.0,
            public_facilities: vec![],
            schools: vec![],
            groceries: vec![],
            historic_sites: vec![],
            current_year: 2016,
            pop10: 0,
            pop_current: None,
            house10: None,
            house_current: None,
            new_dev: None,
            guide_docs: vec![GuideDoc {
                name: "Downtown Master Plan".to_string(),
                url: None,
            }],
        }
    }

    #[test]
    fn test_write_profile_uses_sanitized_name() {
        let dir = tempdir().unwrap();
        let template = ProfileTemplate::from_source(
            "profile.html",
            "<h1>{{ neighborhood_name }}</h1><p>{{ parks }}|{{ schools }}|{{ pop_current }}</p>",
        )
        .unwrap();

        let path = write_profile(dir.path(), &template, &record("Lower Hellgate & Slant")).unwrap();
        assert_eq!(path, dir.path().join("Lower_Hellgate_Slant.html"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<h1>Lower Hellgate & Slant</h1><p>Greenough Park|None|PENDING</p>"
        );
    }

    #[test]
    fn test_write_profile_overwrites() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Rattlesnake.html"), "stale").unwrap();
        let template = ProfileTemplate::from_source("p.html", "{{ date_est }}").unwrap();

        let path = write_profile(dir.path(), &template, &record("Rattlesnake")).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "1976");
    }

    #[test]
    fn test_write_profile_missing_dir() {
        let dir = tempdir().unwrap();
        let template = ProfileTemplate::from_source("p.html", "x").unwrap();

        let err = write_profile(&dir.path().join("gone"), &template, &record("Rattlesnake"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
