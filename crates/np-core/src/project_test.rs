use super::*;
use std::fs;
use tempfile::tempdir;

fn scaffold(root: &Path) {
    fs::write(root.join("nhoods.yml"), "name: test_profiles").unwrap();
    for dir in ["templates", "descriptions", "profiles", "data"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    fs::write(root.join("templates/profile_template.html"), "{{ parks }}").unwrap();
    fs::write(root.join("templates/nhood_template.yml"), "layers: []").unwrap();
    fs::write(root.join("data/WardReps.csv"), "Ward 1\nRattlesnake\n").unwrap();
    fs::write(root.join("data/GuidingDocs.csv"), "document,neighborhoods,url\n").unwrap();
}

#[test]
fn test_load_resolves_paths() {
    let temp = tempdir().unwrap();
    scaffold(temp.path());

    let project = Project::load(temp.path(), None).unwrap();
    assert_eq!(project.config.name, "test_profiles");
    assert_eq!(project.paths.profiles, temp.path().join("profiles"));
    assert_eq!(
        project.paths.map_template,
        temp.path().join("templates").join("nhood_template.yml")
    );
}

#[test]
fn test_load_with_config_override() {
    let temp = tempdir().unwrap();
    scaffold(temp.path());
    fs::write(temp.path().join("other.yml"), "name: other").unwrap();

    let project = Project::load(temp.path(), Some(Path::new("other.yml"))).unwrap();
    assert_eq!(project.config.name, "other");
}

#[test]
fn test_check_environment_ok() {
    let temp = tempdir().unwrap();
    scaffold(temp.path());

    let project = Project::load(temp.path(), None).unwrap();
    project.check_environment().unwrap();
}

#[test]
fn test_check_environment_reports_missing_path() {
    let temp = tempdir().unwrap();
    scaffold(temp.path());
    fs::remove_dir_all(temp.path().join("descriptions")).unwrap();

    let project = Project::load(temp.path(), None).unwrap();
    match project.check_environment().unwrap_err() {
        CoreError::MissingPath { path } => assert!(path.ends_with("descriptions")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_check_environment_refuses_existing_pdfs() {
    let temp = tempdir().unwrap();
    scaffold(temp.path());
    fs::write(temp.path().join("profiles/Rattlesnake.pdf"), b"%PDF").unwrap();

    let project = Project::load(temp.path(), None).unwrap();
    let err = project.check_environment().unwrap_err();
    assert!(matches!(err, CoreError::PdfsExist { .. }));
}

#[test]
fn test_uppercase_pdf_extension_is_stale_output() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Rattlesnake.PDF"), b"%PDF").unwrap();

    let err = ensure_no_pdfs(temp.path()).unwrap_err();
    match err {
        CoreError::PdfsExist { path } => assert!(path.ends_with("Rattlesnake.PDF")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_html_alone_is_not_stale_output() {
    let temp = tempdir().unwrap();
    scaffold(temp.path());
    fs::write(temp.path().join("profiles/Rattlesnake.html"), "<html/>").unwrap();

    let project = Project::load(temp.path(), None).unwrap();
    project.check_export().unwrap();
}
