use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write_sheets(wards: &str, docs: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = tempdir().unwrap();
    let ward_path = temp.path().join("WardReps.csv");
    let docs_path = temp.path().join("GuidingDocs.csv");
    fs::write(&ward_path, wards).unwrap();
    fs::write(&docs_path, docs).unwrap();
    (temp, ward_path, docs_path)
}

const WARDS: &str = "\
Ward 4 - Amber Sherrill,Ward 1 - Jordan Hess,Ward 3 - Gwen Jones
Rattlesnake,Rattlesnake,Lower Hellgate
,Northside,
";

const DOCS: &str = "\
document,neighborhoods,url
Rattlesnake Valley Plan,Rattlesnake,https://example.org/rattlesnake.pdf
Downtown Master Plan,Lower Hellgate; Northside,
Our Missoula Growth Policy,Rattlesnake;Lower Hellgate,https://example.org/growth.pdf
";

#[test]
fn test_wards_sorted() {
    let (_temp, wards, docs) = write_sheets(WARDS, DOCS);
    let refs = ReferenceTables::load(&wards, &docs).unwrap();

    assert_eq!(
        refs.wards_for("Rattlesnake").unwrap(),
        vec!["Ward 1 - Jordan Hess", "Ward 4 - Amber Sherrill"]
    );
    assert_eq!(
        refs.wards_for("Lower Hellgate").unwrap(),
        vec!["Ward 3 - Gwen Jones"]
    );
}

#[test]
fn test_wards_require_exact_match() {
    let (_temp, wards, docs) = write_sheets(WARDS, DOCS);
    let refs = ReferenceTables::load(&wards, &docs).unwrap();

    assert!(refs.wards_for("Rattle").unwrap().is_empty());
    assert!(refs.wards_for("Franklin").unwrap().is_empty());
}

#[test]
fn test_guide_docs_in_sheet_order() {
    let (_temp, wards, docs) = write_sheets(WARDS, DOCS);
    let refs = ReferenceTables::load(&wards, &docs).unwrap();

    let found = refs.guide_docs_for("Lower Hellgate");
    assert_eq!(
        found,
        vec![
            GuideDoc {
                name: "Downtown Master Plan".to_string(),
                url: None,
            },
            GuideDoc {
                name: "Our Missoula Growth Policy".to_string(),
                url: Some("https://example.org/growth.pdf".to_string()),
            },
        ]
    );
    assert!(refs.guide_docs_for("Franklin").is_empty());
}

#[test]
fn test_guide_docs_missing_column() {
    let (_temp, wards, docs) = write_sheets(WARDS, "document,url\nPlan,\n");
    let err = ReferenceTables::load(&wards, &docs).err().unwrap();
    assert!(matches!(err, DbError::MissingColumn { column, .. } if column == "neighborhoods"));
}
