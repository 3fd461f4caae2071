use super::*;
use crate::context::NONE;
use np_core::NeighborhoodName;
use std::fs;
use tempfile::TempDir;

fn record(name: &str) -> ProfileRecord {
    ProfileRecord {
        name: NeighborhoodName::new(name),
        description: None,
        date_est: Some("1996".to_string()),
        area: 120.5,
        council_reps: vec!["Ward 3 - Gwen Jones".to_string()],
        parks: vec!["Greenough Park".to_string()],
        park_acres: 10.5,
        trail_mi: 0.0,
        public_facilities: vec!["Fire Station 2".to_string()],
        schools: vec![],
        groceries: vec![],
        historic_sites: vec![],
        current_year: 2016,
        pop10: 300,
        pop_current: None,
        house10: None,
        house_current: None,
        new_dev: None,
        guide_docs: vec![],
    }
}

#[test]
fn test_render_simple() {
    let template =
        ProfileTemplate::from_source("profile.html", "<h1>{{ neighborhood_name }}</h1>").unwrap();
    let html = template.render_record(&record("Lower Hellgate")).unwrap();
    assert_eq!(html, "<h1>Lower Hellgate</h1>");
}

#[test]
fn test_markup_not_escaped() {
    let template = ProfileTemplate::from_source("profile.html", "{{ council_reps }}|{{ parks }}")
        .unwrap();
    let mut rec = record("Rattlesnake");
    rec.parks.push("Tom Green Park".to_string());
    let html = template.render_record(&rec).unwrap();
    assert_eq!(html, "Ward 3 - Gwen Jones|Greenough Park<br>Tom Green Park");
}

#[test]
fn test_sentinels_print_verbatim() {
    let template =
        ProfileTemplate::from_source("profile.html", "{{ schools }} {{ house10 }} {{ loc_desc }}")
            .unwrap();
    let html = template.render_record(&record("Rattlesnake")).unwrap();
    assert_eq!(html, format!("{NONE} PENDING {NONE}"));
}

#[test]
fn test_undefined_key_is_error() {
    let template = ProfileTemplate::from_source("profile.html", "{{ pop20 }}").unwrap();
    let err = template.render_record(&record("Rattlesnake")).unwrap_err();
    assert!(matches!(err, JinjaError::RenderError(_)));
}

#[test]
fn test_syntax_error_fails_at_load() {
    let err = ProfileTemplate::from_source("profile.html", "{% if parks %}").err().unwrap();
    assert!(matches!(err, JinjaError::TemplateLoad { .. }));
}

#[test]
fn test_render_is_deterministic() {
    let template = ProfileTemplate::from_source(
        "profile.html",
        "{% for key in [parks, schools, pub_fac] %}<td>{{ key }}</td>{% endfor %}",
    )
    .unwrap();
    let rec = record("Rattlesnake");
    assert_eq!(
        template.render_record(&rec).unwrap(),
        template.render_record(&rec).unwrap()
    );
}

#[test]
fn test_load_from_directory_with_include() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("header.html"),
        "<header>{{ neighborhood_name }} ({{ current_year }})</header>",
    )
    .unwrap();
    fs::write(
        temp.path().join("profile_template.html"),
        r#"{% include "header.html" %}<p>{{ pub_fac }}</p>"#,
    )
    .unwrap();

    let template = ProfileTemplate::load(temp.path(), "profile_template.html").unwrap();
    assert_eq!(template.name(), "profile_template.html");
    let html = template.render_record(&record("Lower Hellgate")).unwrap();
    assert_eq!(html, "<header>Lower Hellgate (2016)</header><p>Fire Station 2</p>");
}

#[test]
fn test_load_missing_template() {
    let temp = TempDir::new().unwrap();
    let err = ProfileTemplate::load(temp.path(), "profile_template.html")
        .err()
        .unwrap();
    assert!(err.to_string().starts_with("[J002]"));
}
