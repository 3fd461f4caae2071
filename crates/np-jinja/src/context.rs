//! Template context for one profile

use np_core::ProfileRecord;
use serde::Serialize;

/// Printed for empty lists and missing descriptions
pub const NONE: &str = "None";
/// Printed for figures the office has not sourced yet
pub const PENDING: &str = "PENDING";
/// Joins list entries inside one table cell
pub const LIST_SEPARATOR: &str = "<br>";

/// The flat mapping handed to the HTML template.
///
/// Every value is pre-formatted text, so templates can print any key
/// without filters and always see either data or a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileContext {
    pub neighborhood_name: String,
    pub loc_desc: String,
    pub date_est: String,
    pub area: String,
    pub council_reps: String,
    pub parks: String,
    pub park_acres: String,
    pub trail_mi: String,
    pub pub_fac: String,
    pub schools: String,
    pub groceries: String,
    pub hist_res: String,
    pub current_year: String,
    pub pop10: String,
    pub pop_current: String,
    pub house10: String,
    pub house_current: String,
    pub new_dev: String,
    pub guide_docs: String,
}

impl From<&ProfileRecord> for ProfileContext {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            neighborhood_name: record.name.to_string(),
            loc_desc: record
                .description
                .clone()
                .unwrap_or_else(|| NONE.to_string()),
            date_est: record.date_est.clone().unwrap_or_else(|| NONE.to_string()),
            area: one_decimal(record.area),
            council_reps: join_or_none(&record.council_reps),
            parks: join_or_none(&record.parks),
            park_acres: one_decimal(record.park_acres),
            trail_mi: one_decimal(record.trail_mi),
            pub_fac: join_or_none(&record.public_facilities),
            schools: join_or_none(&record.schools),
            groceries: join_or_none(&record.groceries),
            hist_res: join_or_none(&record.historic_sites),
            current_year: record.current_year.to_string(),
            pop10: record.pop10.to_string(),
            pop_current: or_pending(record.pop_current),
            house10: or_pending(record.house10),
            house_current: or_pending(record.house_current),
            new_dev: or_pending(record.new_dev.as_ref()),
            guide_docs: join_or_none(
                &record
                    .guide_docs
                    .iter()
                    .map(|d| d.to_html())
                    .collect::<Vec<_>>(),
            ),
        }
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE.to_string()
    } else {
        items.join(LIST_SEPARATOR)
    }
}

fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

fn or_pending<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| PENDING.to_string(), |v| v.to_string())
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
