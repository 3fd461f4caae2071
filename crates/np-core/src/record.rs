//! Typed profile record produced for one neighborhood

use crate::name::NeighborhoodName;
use serde::Serialize;

/// A planning document associated with a neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideDoc {
    pub name: String,
    pub url: Option<String>,
}

impl GuideDoc {
    /// HTML fragment: an anchor when a URL is known, the bare name otherwise.
    pub fn to_html(&self) -> String {
        match &self.url {
            Some(url) => format!(r#"<a href="{url}" title="{0}">{0}</a>"#, self.name),
            None => self.name.clone(),
        }
    }
}

/// Everything collected for one neighborhood.
///
/// Values the office has not sourced yet are `None`; the template layer
/// decides how to print them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub name: NeighborhoodName,
    /// First line of the neighborhood's extent description file
    pub description: Option<String>,
    /// Year the neighborhood was established, as stored in the layer
    pub date_est: Option<String>,
    /// Acres, rounded to one decimal
    pub area: f64,
    /// Ward labels (ward number and representatives), sorted
    pub council_reps: Vec<String>,
    pub parks: Vec<String>,
    pub park_acres: f64,
    pub trail_mi: f64,
    pub public_facilities: Vec<String>,
    pub schools: Vec<String>,
    pub groceries: Vec<String>,
    pub historic_sites: Vec<String>,
    pub current_year: i32,
    /// 2010 census population
    pub pop10: u64,
    pub pop_current: Option<u64>,
    pub house10: Option<u64>,
    pub house_current: Option<u64>,
    pub new_dev: Option<String>,
    pub guide_docs: Vec<GuideDoc>,
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
