//! Ward and planning-document reference tables

use crate::duckdb::SheetDb;
use crate::error::{DbError, DbResult};
use np_core::GuideDoc;
use std::path::Path;

pub const WARD_REPS_TABLE: &str = "ward_reps";
pub const GUIDE_DOCS_TABLE: &str = "guide_docs";

/// Separator between neighborhood names in the guide-doc spreadsheet
const NEIGHBORHOOD_SEPARATOR: char = ';';

struct GuideDocRow {
    doc: GuideDoc,
    neighborhoods: Vec<String>,
}

/// The two reference spreadsheets, loaded once per run.
///
/// The ward sheet has one column per ward (header = ward label) listing the
/// neighborhoods in that ward. The guide-doc sheet has one row per document
/// with `document`, `neighborhoods` (`;`-separated) and an optional `url`.
pub struct ReferenceTables {
    db: SheetDb,
    ward_columns: Vec<String>,
    guide_docs: Vec<GuideDocRow>,
}

impl ReferenceTables {
    /// Load both spreadsheets into a fresh in-memory database
    pub fn load(ward_reps: &Path, guide_docs: &Path) -> DbResult<Self> {
        let db = SheetDb::in_memory()?;

        db.load_csv(WARD_REPS_TABLE, ward_reps)?;
        let ward_columns = db.columns(WARD_REPS_TABLE)?;

        db.load_csv(GUIDE_DOCS_TABLE, guide_docs)?;
        let columns = db.columns(GUIDE_DOCS_TABLE)?;
        for required in ["document", "neighborhoods", "url"] {
            if !columns.iter().any(|c| c == required) {
                return Err(DbError::MissingColumn {
                    path: guide_docs.display().to_string(),
                    column: required.to_string(),
                });
            }
        }

        let guide_docs = db
            .text_rows(GUIDE_DOCS_TABLE, &["document", "neighborhoods", "url"])?
            .into_iter()
            .filter_map(|row| {
                let mut cells = row.into_iter();
                let name = cells.next().flatten()?;
                let neighborhoods = cells
                    .next()
                    .flatten()
                    .map(|list| {
                        list.split(NEIGHBORHOOD_SEPARATOR)
                            .map(|n| n.trim().to_string())
                            .filter(|n| !n.is_empty())
                            .collect()
                    })
                    .unwrap_or_default();
                let url = cells
                    .next()
                    .flatten()
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty());
                Some(GuideDocRow {
                    doc: GuideDoc { name, url },
                    neighborhoods,
                })
            })
            .collect();

        Ok(Self {
            db,
            ward_columns,
            guide_docs,
        })
    }

    /// Ward labels whose column lists the neighborhood, sorted
    pub fn wards_for(&self, neighborhood: &str) -> DbResult<Vec<String>> {
        let mut wards = Vec::new();
        for column in &self.ward_columns {
            if self.db.count_matches(WARD_REPS_TABLE, column, neighborhood)? > 0 {
                wards.push(column.clone());
            }
        }
        wards.sort();
        Ok(wards)
    }

    /// Planning documents covering the neighborhood, in spreadsheet order
    pub fn guide_docs_for(&self, neighborhood: &str) -> Vec<GuideDoc> {
        self.guide_docs
            .iter()
            .filter(|row| row.neighborhoods.iter().any(|n| n == neighborhood))
            .map(|row| row.doc.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "references_test.rs"]
mod tests;
